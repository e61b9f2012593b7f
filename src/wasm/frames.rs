//! [`FrameScheduler`] over `requestAnimationFrame`, `performance.now` and a
//! `gloo-timers` timeout.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::schedule::FrameScheduler;

pub struct BrowserScheduler {
    window: Window,
    /// Invoked by `requestAnimationFrame`. Installed once the driver exists.
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    /// Invoked when the grace timeout fires. Installed once the driver exists.
    on_grace: Option<Rc<dyn Fn()>>,
    pending_frame: Option<i32>,
    grace: Option<Timeout>,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self { window, on_frame: None, on_grace: None, pending_frame: None, grace: None }
    }

    pub fn set_frame_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.on_frame = Some(callback);
    }

    pub fn set_grace_callback(&mut self, callback: Rc<dyn Fn()>) {
        self.on_grace = Some(callback);
    }

    /// Called from the frame callback: the pending id has been consumed.
    pub fn frame_fired(&mut self) {
        self.pending_frame = None;
    }
}

impl FrameScheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }

    fn request_frame(&mut self) {
        if self.pending_frame.is_some() {
            return;
        }
        let Some(callback) = self.on_frame.as_ref() else {
            log::warn!("frame requested before the frame callback was installed");
            return;
        };
        match self.window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending_frame = Some(id),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.pending_frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::debug!("cancelAnimationFrame({id}) failed: {err:?}");
            }
        }
    }

    fn schedule_completion(&mut self, delay_ms: f64) {
        let Some(on_grace) = self.on_grace.clone() else {
            log::warn!("completion scheduled before the grace callback was installed");
            return;
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = delay_ms.max(0.0).round() as u32;
        self.grace = Some(Timeout::new(millis, move || on_grace()));
    }

    fn cancel_completion(&mut self) {
        // Dropping a gloo `Timeout` clears it.
        self.grace = None;
    }
}
