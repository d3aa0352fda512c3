use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("canvas element is not mounted")]
    CanvasMissing,
    #[error("2D canvas context is unavailable")]
    NoContext2d,
    #[error("renderer setup failed: {0}")]
    Js(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| "unknown error".to_string());
        SetupError::Js(msg)
    }
}
