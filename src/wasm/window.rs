//! [`ViewportSource`] over the browser window.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::geometry::Viewport;
use crate::viewport::ViewportSource;

pub struct WindowViewport {
    window: Window,
    /// Resize listener. Installed once the driver exists.
    on_resize: Option<Closure<dyn FnMut()>>,
    watching: bool,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window, on_resize: None, watching: false }
    }

    pub fn set_resize_callback(&mut self, callback: Closure<dyn FnMut()>) {
        self.unwatch_resize();
        self.on_resize = Some(callback);
    }
}

impl ViewportSource for WindowViewport {
    fn measure(&self) -> Viewport {
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
            self.window.device_pixel_ratio(),
        )
    }

    fn watch_resize(&mut self) {
        if self.watching {
            return;
        }
        let Some(callback) = self.on_resize.as_ref() else {
            return;
        };
        match self
            .window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            Ok(()) => self.watching = true,
            Err(err) => log::warn!("could not watch window resize: {err:?}"),
        }
    }

    fn unwatch_resize(&mut self) {
        if !self.watching {
            return;
        }
        self.watching = false;
        if let Some(callback) = self.on_resize.as_ref() {
            if let Err(err) = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                log::debug!("could not unwatch window resize: {err:?}");
            }
        }
    }
}

impl Drop for WindowViewport {
    fn drop(&mut self) {
        self.unwatch_resize();
    }
}
