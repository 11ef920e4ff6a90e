use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{debug, error};

/// JSON error body: `{"error": "<title>", "detail": "<optional detail>"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(detail.into()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Model(inner) => Self::validation(inner.to_string()),
        }
    }
}

// Malformed or mistyped request bodies and query strings are validation errors.
impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self {
        Self::validation(e.body_text())
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(e: QueryRejection) -> Self {
        Self::validation(e.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.error, detail = ?self.detail, "request failed");
        } else {
            debug!(status = %self.status, error = self.error, detail = ?self.detail, "request rejected");
        }
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}
