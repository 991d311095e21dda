use ember_trail::TrailError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the trail could not be mounted. All of them leave the page
/// untouched; the overlay is cosmetic.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("canvas has no 2d context")]
    NoContext,

    #[error(transparent)]
    Config(#[from] TrailError),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(format!("{:?}", value))
    }
}
