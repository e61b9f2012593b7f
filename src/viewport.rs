//! Viewport measurement and resize notifications.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Viewport;

/// Source of viewport readings. Resize notifications are delivered to the
/// driver's `on_resize` while watching.
pub trait ViewportSource {
    fn measure(&self) -> Viewport;

    /// Start delivering resize notifications. Idempotent.
    fn watch_resize(&mut self);

    /// Stop delivering resize notifications. Idempotent.
    fn unwatch_resize(&mut self);
}

#[derive(Debug)]
struct FixedState {
    viewport: Viewport,
    watching: bool,
}

/// Viewport whose size is set by the caller. Clones share state.
#[derive(Debug, Clone)]
pub struct FixedViewport {
    state: Rc<RefCell<FixedState>>,
}

impl FixedViewport {
    #[must_use]
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(FixedState {
                viewport: Viewport::new(width, height, device_pixel_ratio),
                watching: false,
            })),
        }
    }

    pub fn set(&self, viewport: Viewport) {
        self.state.borrow_mut().viewport = viewport;
    }

    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.state.borrow().watching
    }
}

impl ViewportSource for FixedViewport {
    fn measure(&self) -> Viewport {
        self.state.borrow().viewport
    }

    fn watch_resize(&mut self) {
        self.state.borrow_mut().watching = true;
    }

    fn unwatch_resize(&mut self) {
        self.state.borrow_mut().watching = false;
    }
}
