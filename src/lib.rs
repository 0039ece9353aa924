//! WebAssembly entry point for the landing page widgets.
//!
//! The page markup ships with two independent widgets: a draggable hero strip
//! and a slide carousel. This crate resolves their elements once at start-up,
//! binds pointer and click listeners, and applies the actions produced by the
//! browser-free state machines in the `widgets` crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`hero`] | Hero strip element lookup and pointer wiring |
//! | [`carousel`] | Carousel element lookup, button wiring and text-swap timers |
//! | [`dom`] | Shared lookup, style and listener helpers |

pub mod carousel;
pub mod dom;
pub mod hero;

use wasm_bindgen::prelude::*;
use widgets::config::PageConfig;
use widgets::slide::Catalog;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by another module on the page.
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
    mount(&PageConfig::default());
}

/// Mount both widgets against the current document.
///
/// Each widget is skipped independently when its elements are absent. An
/// invalid config mounts nothing.
pub fn mount(config: &PageConfig) {
    if let Err(err) = config.validate() {
        log::error!("widgets disabled: {err}");
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    match config.hero.bounds() {
        Ok(bounds) => {
            if let Some(elements) = hero::HeroElements::resolve(&document, &config.hero) {
                hero::mount(elements, bounds);
            }
        }
        Err(err) => log::error!("hero strip disabled: {err}"),
    }

    match Catalog::builtin() {
        Ok(catalog) => {
            let elements = carousel::CarouselElements::resolve(&document, &config.carousel);
            carousel::mount(elements, catalog, &config.carousel);
        }
        Err(err) => log::error!("carousel disabled: {err}"),
    }
}
