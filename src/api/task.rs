//! Task Commands
//!
//! Frontend bindings for task-related backend calls.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{transport_error, ApiError};

/// Endpoint for task creation. The path is deliberately not served by
/// anything; requests to it demonstrate the failure handling.
pub const CREATE_TASK_URL: &str = "/api/this-endpoint-does-not-exist";

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub task: &'a str,
}

/// POST the new task as JSON. Resolves to `Ok(())` only on a success
/// status; any other outcome is an [`ApiError`].
pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<(), ApiError> {
    let body = serde_json::to_string(args).map_err(|e| ApiError::Transport(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CREATE_TASK_URL, &opts).map_err(transport_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport_error)?;

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    let response: Response = response.dyn_into().map_err(transport_error)?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_args_serialize_as_task_object() {
        let args = CreateTaskArgs { task: "Buy milk" };
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"task":"Buy milk"}"#);
    }

    #[test]
    fn test_api_error_display_carries_the_status() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP error! status: 404");
        assert_eq!(
            ApiError::Transport("Failed to fetch".to_string()).to_string(),
            "network error: Failed to fetch"
        );
    }
}
