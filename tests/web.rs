#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let elem = document.create_element("canvas").unwrap();
    document.body().unwrap().append_child(&elem).unwrap();
    elem.dyn_into::<web_sys::HtmlCanvasElement>().unwrap()
}

#[wasm_bindgen_test]
fn loader_sizes_canvas_to_viewport() {
    let canvas = canvas();
    let handle = intro_loader::start_loader(canvas.clone(), js_sys::Function::new_no_args(""), None)
        .unwrap()
        .expect("2d context available");

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    assert!(width > 0.0);
    assert!(f64::from(canvas.width()) >= width.floor());
    assert!(!handle.completed());
    handle.stop();
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let result = intro_loader::start_loader(
        canvas(),
        js_sys::Function::new_no_args(""),
        Some(r#"{"trail_factor": 2}"#.to_string()),
    );
    assert!(result.is_err());
}

fn element(tag: &str, id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let elem = document.create_element(tag).unwrap();
    elem.set_id(id);
    document.body().unwrap().append_child(&elem).unwrap();
    elem.dyn_into::<web_sys::HtmlElement>().unwrap()
}

#[wasm_bindgen_test]
async fn landing_page_hands_over_to_hero() {
    let loader = element("canvas", "loader");
    loader
        .set_attribute(
            "data-loader-config",
            r#"{"timeline":{"grid_ms":0,"scaffold_ms":0,"letterform_ms":0,"hold_ms":0},"grace_ms":0,"fade_ms":0}"#,
        )
        .unwrap();
    let hero = element("div", "hero");
    hero.set_attribute("aria-hidden", "true").unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    intro_loader::mount_landing_page(&document).unwrap();
    assert!(intro_loader::is_mounted());

    for _ in 0..40 {
        if !intro_loader::is_mounted() {
            break;
        }
        gloo_timers::future::TimeoutFuture::new(50).await;
    }

    assert!(!intro_loader::is_mounted());
    let loader_style = loader.style();
    assert_eq!(loader_style.get_property_value("opacity").unwrap(), "0");
    assert_eq!(loader_style.get_property_value("display").unwrap(), "none");
    assert_eq!(hero.style().get_property_value("opacity").unwrap(), "1");
    assert!(!hero.has_attribute("aria-hidden"));

    loader.remove();
    hero.remove();
}
