//! Browser bridge for the ember trail.
//!
//! The page shell calls `particles_mount` with its overlay canvas and
//! `particles_unmount` when the overlay goes away. wasm-bindgen cannot export
//! the mounted component itself, so it lives in a `thread_local!` slot.

pub mod canvas;
pub mod cursor;
pub mod error;
pub mod host;

pub use canvas::CanvasSurface;
pub use cursor::CursorParticles;
pub use error::MountError;

use std::cell::RefCell;

use ember_trail::TrailConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

thread_local! {
    static MOUNTED: RefCell<Option<CursorParticles>> = const { RefCell::new(None) };
}

fn with_mounted<R>(f: impl FnOnce(&CursorParticles) -> R) -> Option<R> {
    MOUNTED.with(|cell| cell.borrow().as_ref().map(f))
}

/// Parse the optional config JSON; anything invalid falls back to defaults.
fn parse_config(config_json: Option<String>) -> TrailConfig {
    match config_json.as_deref() {
        None => TrailConfig::default(),
        Some(json) => TrailConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("ember-web: {}, using defaults", err);
            TrailConfig::default()
        }),
    }
}

/// Mount the cursor trail on `canvas`. Any previous mount is torn down
/// first. Failure leaves the page untouched.
#[wasm_bindgen]
pub fn particles_mount(canvas: HtmlCanvasElement, config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = parse_config(config_json);

    // Drop outside the borrow: unmounting touches the browser.
    let previous = MOUNTED.with(|cell| cell.borrow_mut().take());
    if previous.is_some() {
        log::warn!("ember-web: remounting without unmount, dropping previous trail");
    }
    drop(previous);

    match CursorParticles::mount(canvas, config) {
        Ok(particles) => {
            MOUNTED.with(|cell| *cell.borrow_mut() = Some(particles));
            log::info!("ember-web: initialized");
        }
        Err(err) => log::warn!("ember-web: cursor trail disabled: {}", err),
    }
}

/// Stop the trail and release every listener and frame callback.
#[wasm_bindgen]
pub fn particles_unmount() {
    let mounted = MOUNTED.with(|cell| cell.borrow_mut().take());
    if let Some(mut particles) = mounted {
        particles.unmount();
    }
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn particles_count() -> u32 {
    with_mounted(|p| p.particle_count() as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_mounted(|p| p.instances_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_mounted(|p| p.instance_count()).unwrap_or(0)
}
