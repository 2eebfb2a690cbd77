//! Error types for the hero component

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can keep part of the hero from starting.
///
/// None of these are shown to the visitor: the component logs them and
/// renders without the affected effect.
#[derive(Error, Debug)]
pub enum HeroError {
    #[error("browser window is not available")]
    WindowUnavailable,

    #[error("document is not available")]
    DocumentUnavailable,

    #[error("canvas element is not mounted")]
    CanvasUnavailable,

    #[error("2d drawing context is not available")]
    ContextUnavailable,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("site content error: {0}")]
    Content(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeroError>;

impl From<JsValue> for HeroError {
    fn from(value: JsValue) -> Self {
        HeroError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
