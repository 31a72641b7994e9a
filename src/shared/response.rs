//! API Response Envelope
//!
//! Every endpoint answers with the same JSON shape:
//!
//! ```json
//! { "isSuccess": true, "data": { ... }, "message": null }
//! ```
//!
//! Success and failure are chosen explicitly by constructor. A failure
//! envelope never carries data.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::error::FieldError;

/// Uniform wrapper for endpoint results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    is_success: bool,
    data: Option<T>,
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldError>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying a payload.
    pub fn ok(data: T) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            message: None,
            errors: Vec::new(),
        }
    }

    /// Success envelope carrying a payload and an informational message.
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Success envelope for side-effect-only operations.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            data: None,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Failure envelope.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data: None,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Failure envelope with field-level detail.
    pub fn fail_with_errors(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            is_success: false,
            data: None,
            message: Some(message.into()),
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        self.is_success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = if self.is_success {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_ok_keeps_data_for_default_values() {
        let empty: ApiResponse<Vec<i32>> = ApiResponse::ok(Vec::new());
        assert!(empty.is_success());
        assert_eq!(empty.data(), Some(&Vec::new()));

        let zero = ApiResponse::ok(0u32);
        assert!(zero.is_success());
        assert_eq!(zero.into_data(), Some(0));

        let blank = ApiResponse::ok(String::new());
        assert_eq!(blank.data().map(String::as_str), Some(""));
    }

    #[test]
    fn test_ok_message_has_no_data() {
        let response: ApiResponse<()> = ApiResponse::ok_message("Station deleted");
        assert!(response.is_success());
        assert!(response.data().is_none());
        assert_eq!(response.message(), Some("Station deleted"));
    }

    #[test]
    fn test_fail_never_carries_data() {
        let response: ApiResponse<String> = ApiResponse::fail("Renter not found");
        assert!(!response.is_success());
        assert!(response.data().is_none());

        let with_errors: ApiResponse<String> = ApiResponse::fail_with_errors(
            "Validation failed",
            vec![FieldError {
                field: "page".into(),
                message: "must be at least 1".into(),
            }],
        );
        assert!(!with_errors.is_success());
        assert!(with_errors.into_data().is_none());
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let value = serde_json::to_value(ApiResponse::ok_with_message(7, "created")).unwrap();
        assert_eq!(
            value,
            json!({ "isSuccess": true, "data": 7, "message": "created" })
        );

        let value = serde_json::to_value(ApiResponse::<i32>::fail("nope")).unwrap();
        assert_eq!(
            value,
            json!({ "isSuccess": false, "data": null, "message": "nope" })
        );
    }

    #[test]
    fn test_failure_status() {
        assert_eq!(
            ApiResponse::<()>::fail("bad").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiResponse::ok(1).into_response().status(), StatusCode::OK);
    }
}
