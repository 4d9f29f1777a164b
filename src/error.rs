//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure loading the resume list
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
}

/// A browser API call failed or is unavailable
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        PlatformError::Js(message)
    }
}

impl From<serde_wasm_bindgen::Error> for PlatformError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        PlatformError::Js(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(500).to_string(), "server responded with status 500");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(
            PlatformError::Unavailable("localStorage").to_string(),
            "localStorage is not available"
        );
    }
}
