//! Intro loader for the landing page.
//!
//! A canvas animation that plays once (grid reveal, diagonal scaffolding,
//! stroke-drawn letterform), then hands over to the hero view. The animation
//! core is target-independent; browser bindings live in `wasm` and are only
//! compiled for wasm32.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`driver`] | Playthrough state machine and completion callback |
//! | [`timeline`] | Phase durations and progress as a function of elapsed time |
//! | [`grid`], [`scaffold`], [`letterform`] | Pure per-layer geometry |
//! | [`scene`], [`paint`] | Frame composition and the [`paint::Surface`] seam |
//! | [`schedule`], [`viewport`] | Injected frame clock and viewport source |
//! | [`config`] | Tunables, loadable from JSON |

pub mod config;
pub mod driver;
pub mod ease;
pub mod geometry;
pub mod grid;
pub mod letterform;
pub mod paint;
pub mod scaffold;
pub mod scene;
pub mod schedule;
pub mod style;
pub mod timeline;
pub mod viewport;

pub use config::{ConfigError, LoaderConfig};
pub use driver::{ActivationError, Driver, OnComplete};
pub use timeline::{LoaderState, Phase, PhaseProgress, Timeline};

// Only compile browser bindings when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod frames;
    mod host;
    mod render;
    mod window;

    pub use host::{is_mounted, mount as mount_landing_page};
    pub use render::{start_loader, LoaderHandle};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"loader logging already initialised".into());
        }

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        host::mount(&document)
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{is_mounted, mount_landing_page, start_loader, LoaderHandle};
