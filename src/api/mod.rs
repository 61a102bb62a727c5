//! Backend API Wrappers
//!
//! Frontend bindings for the demo backend, organized by domain. The backend
//! does not exist; calls here are expected to fail and the callers handle
//! that failure path.

mod task;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

// Re-export all public items
pub use task::*;

/// Failure signal raised by an API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport succeeded but the response carried a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),
}

/// Map a JS-side rejection into a transport error, keeping the error
/// message where one is available
fn transport_error(value: JsValue) -> ApiError {
    let detail = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(detail)
}
