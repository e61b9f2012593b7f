//! Wiring a [`Driver`] to a canvas: frame, resize and grace callbacks.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::canvas::CanvasSurface;
use super::frames::BrowserScheduler;
use super::window::WindowViewport;
use crate::config::LoaderConfig;
use crate::driver::{Driver, OnComplete};

pub type BrowserDriver = Driver<CanvasSurface, BrowserScheduler, WindowViewport>;
pub type SharedDriver = Rc<RefCell<BrowserDriver>>;

/// Start the loader on `canvas`.
///
/// Returns `Ok(None)` when the canvas has no 2D context: nothing is drawn
/// and `on_complete` never runs.
///
/// `on_complete` runs while the driver is idle (not borrowed), so it may
/// drop or stop the loader.
pub fn launch(
    canvas: HtmlCanvasElement,
    config: LoaderConfig,
    on_complete: OnComplete,
) -> Result<Option<SharedDriver>, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let surface = CanvasSurface::from_canvas(canvas);
    let scheduler = BrowserScheduler::new(window.clone());
    let viewport = WindowViewport::new(window);

    let driver = match Driver::new(config, surface, scheduler, viewport, on_complete) {
        Ok(driver) => Rc::new(RefCell::new(driver)),
        Err(err) => {
            log::warn!("{err}; skipping intro animation");
            return Ok(None);
        }
    };

    install_callbacks(&driver);
    driver.borrow_mut().start();
    Ok(Some(driver))
}

fn install_callbacks(driver: &SharedDriver) {
    let mut d = driver.borrow_mut();

    let weak = Rc::downgrade(driver);
    d.scheduler_mut().set_frame_callback(Closure::wrap(Box::new(move |_ts: f64| {
        with_driver(&weak, |driver| {
            driver.scheduler_mut().frame_fired();
            if let Err(err) = driver.on_frame() {
                log::warn!("loader frame failed: {err:?}");
            }
        });
    }) as Box<dyn FnMut(f64)>));

    let weak = Rc::downgrade(driver);
    d.viewport_mut().set_resize_callback(Closure::wrap(Box::new(move || {
        with_driver(&weak, |driver| {
            if let Err(err) = driver.on_resize() {
                log::warn!("loader resize failed: {err:?}");
            }
        });
    }) as Box<dyn FnMut()>));

    let weak = Rc::downgrade(driver);
    d.scheduler_mut().set_grace_callback(Rc::new(move || {
        // Release the borrow before the host sees the completion.
        let done = weak.upgrade().and_then(|driver| {
            let Ok(mut driver) = driver.try_borrow_mut() else {
                log::warn!("loader busy when grace delay elapsed; completion dropped");
                return None;
            };
            driver.complete()
        });
        if let Some(done) = done {
            done();
        }
    }));
}

fn with_driver(weak: &Weak<RefCell<BrowserDriver>>, f: impl FnOnce(&mut BrowserDriver)) {
    let Some(driver) = weak.upgrade() else {
        return;
    };
    let Ok(mut driver) = driver.try_borrow_mut() else {
        log::debug!("loader busy; dropping callback");
        return;
    };
    f(&mut driver);
}

/// JavaScript handle to a running loader.
#[wasm_bindgen]
pub struct LoaderHandle {
    driver: SharedDriver,
}

#[wasm_bindgen]
impl LoaderHandle {
    /// Cancel the animation. The completion callback will not run.
    pub fn stop(&self) {
        match self.driver.try_borrow_mut() {
            Ok(mut driver) => driver.deactivate(),
            Err(_) => log::warn!("loader busy; stop ignored"),
        }
    }

    /// Whether the timeline has run to its end.
    pub fn completed(&self) -> bool {
        self.driver.try_borrow().is_ok_and(|d| d.is_completed())
    }
}

/// Start the loader on `canvas` and call `on_complete` once it finishes.
///
/// `config` is optional JSON (see `LoaderConfig`). Returns `undefined` when
/// the canvas cannot be drawn on.
#[wasm_bindgen(js_name = startLoader)]
pub fn start_loader(
    canvas: HtmlCanvasElement,
    on_complete: js_sys::Function,
    config: Option<String>,
) -> Result<Option<LoaderHandle>, JsValue> {
    let config = match config {
        Some(json) => LoaderConfig::from_json(&json).map_err(|err| JsValue::from_str(&err.to_string()))?,
        None => LoaderConfig::default(),
    };
    let done: OnComplete = Box::new(move || {
        if let Err(err) = on_complete.call0(&JsValue::NULL) {
            log::warn!("loader completion handler threw: {err:?}");
        }
    });
    Ok(launch(canvas, config, done)?.map(|driver| LoaderHandle { driver }))
}
