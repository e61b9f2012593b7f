//! Frame scheduling capability injected into the driver.

use std::cell::RefCell;
use std::rc::Rc;

/// Clock, frame requests and the one-shot completion timer.
///
/// Implementations call back into the driver (`on_frame`,
/// `on_grace_elapsed`) when a requested frame or timer comes due.
pub trait FrameScheduler {
    /// Monotonic time in milliseconds.
    fn now_ms(&self) -> f64;

    /// Ask for one call to `on_frame`. Requesting twice before the frame
    /// runs still yields a single frame.
    fn request_frame(&mut self);

    /// Drop a pending frame request, if any.
    fn cancel_frame(&mut self);

    /// Ask for one call to `on_grace_elapsed` after `delay_ms`.
    fn schedule_completion(&mut self, delay_ms: f64);

    /// Drop a pending completion timer, if any.
    fn cancel_completion(&mut self);
}

#[derive(Debug, Default)]
struct ManualState {
    now_ms: f64,
    frame_pending: bool,
    frames_requested: usize,
    completion_due: Option<f64>,
}

/// Deterministic scheduler driven by the caller.
///
/// Clones share state, so a test keeps one handle while the driver owns
/// another, advances the clock and asks what is due.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(now_ms: f64) -> Self {
        let scheduler = Self::default();
        scheduler.state.borrow_mut().now_ms = now_ms;
        scheduler
    }

    pub fn set_now(&self, now_ms: f64) {
        self.state.borrow_mut().now_ms = now_ms;
    }

    pub fn advance(&self, delta_ms: f64) {
        self.state.borrow_mut().now_ms += delta_ms;
    }

    /// Consume a pending frame request. Returns whether one was pending.
    pub fn take_frame(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().frame_pending)
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.state.borrow().frame_pending
    }

    /// Total `request_frame` calls so far.
    #[must_use]
    pub fn frames_requested(&self) -> usize {
        self.state.borrow().frames_requested
    }

    /// Absolute time at which the completion timer fires, if armed.
    #[must_use]
    pub fn completion_due(&self) -> Option<f64> {
        self.state.borrow().completion_due
    }

    /// Consume the completion timer if it is due at the current time.
    pub fn take_due_completion(&self) -> bool {
        let mut state = self.state.borrow_mut();
        match state.completion_due {
            Some(due) if state.now_ms >= due => {
                state.completion_due = None;
                true
            }
            _ => false,
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }

    fn request_frame(&mut self) {
        let mut state = self.state.borrow_mut();
        state.frame_pending = true;
        state.frames_requested += 1;
    }

    fn cancel_frame(&mut self) {
        self.state.borrow_mut().frame_pending = false;
    }

    fn schedule_completion(&mut self, delay_ms: f64) {
        let mut state = self.state.borrow_mut();
        state.completion_due = Some(state.now_ms + delay_ms.max(0.0));
    }

    fn cancel_completion(&mut self) {
        self.state.borrow_mut().completion_due = None;
    }
}
