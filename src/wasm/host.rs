//! Landing page host: plays the loader, then cross-fades to the hero view.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use super::render::{launch, SharedDriver};
use crate::config::LoaderConfig;

const LOADER_ID: &str = "loader";
const HERO_ID: &str = "hero";
const CONFIG_ATTR: &str = "data-loader-config";

thread_local! {
    /// The mounted loader, kept alive until the cross-fade has finished.
    static MOUNTED: RefCell<Option<SharedDriver>> = const { RefCell::new(None) };
}

/// Whether a loader is mounted and not yet handed over to the hero view.
pub fn is_mounted() -> bool {
    MOUNTED.with(|mounted| mounted.borrow().is_some())
}

/// Mount the loader if the page has both a `#loader` canvas and a `#hero`
/// element. Pages without them are left alone.
pub fn mount(document: &Document) -> Result<(), JsValue> {
    let Some(canvas) = document
        .get_element_by_id(LOADER_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::debug!("no #{LOADER_ID} canvas; loader not mounted");
        return Ok(());
    };
    let Some(hero) = document
        .get_element_by_id(HERO_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no #{HERO_ID} element; loader not mounted");
        return Ok(());
    };

    let config = read_config(&canvas);
    let fade_ms = config.fade_ms;

    let loader: HtmlElement = canvas.clone().unchecked_into();
    let on_complete = Box::new(move || {
        if let Err(err) = reveal_hero(&loader, &hero, fade_ms) {
            log::warn!("hero cross-fade failed: {err:?}");
        }
    });

    if let Some(driver) = launch(canvas, config, on_complete)? {
        MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(driver));
    }
    Ok(())
}

fn read_config(canvas: &HtmlCanvasElement) -> LoaderConfig {
    let Some(json) = canvas.get_attribute(CONFIG_ATTR) else {
        return LoaderConfig::default();
    };
    LoaderConfig::from_json(&json).unwrap_or_else(|err| {
        log::warn!("{err}; using default loader config");
        LoaderConfig::default()
    })
}

/// Fade the loader out and the hero in, then unmount the loader.
fn reveal_hero(loader: &HtmlElement, hero: &HtmlElement, fade_ms: f64) -> Result<(), JsValue> {
    let transition = format!("opacity {fade_ms}ms ease");
    for (el, opacity) in [(loader, "0"), (hero, "1")] {
        let style = el.style();
        style.set_property("transition", &transition)?;
        style.set_property("opacity", opacity)?;
    }
    hero.remove_attribute("aria-hidden")?;

    let loader = loader.clone();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = fade_ms.round() as u32;
    Timeout::new(millis, move || {
        if let Err(err) = loader.style().set_property("display", "none") {
            log::warn!("could not hide loader: {err:?}");
        }
        // Dropping the driver deactivates it and releases its callbacks.
        MOUNTED.with(|mounted| mounted.borrow_mut().take());
        log::debug!("loader unmounted");
    })
    .forget();
    Ok(())
}
