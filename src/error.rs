//! Errors surfaced across the JavaScript boundary.

use canvas::error::{ConfigError, EditError};
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("canvas element not found: {0}")]
    CanvasNotFound(String),
    #[error("no browser window or document")]
    NoDocument,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error("serialize failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
