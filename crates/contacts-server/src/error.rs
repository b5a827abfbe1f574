//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce `{"message": ...}` JSON bodies
//! with the matching HTTP status code. [`ServerError`] covers failures of the
//! server binary itself (configuration, binding).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contacts_store::ContactError;

use crate::config::ConfigError;
use crate::schema::common::MessageResponse;

/// Message returned when a contact id does not resolve.
pub const CONTACT_NOT_FOUND: &str = "Contact not found";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid request (400): missing fields, malformed body, bad id.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn contact_not_found() -> Self {
        ApiError::NotFound(CONTACT_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// The client-facing message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, message = self.message(), "request rejected");

        let body = MessageResponse::new(self.message());
        (status, axum::Json(body)).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::MissingFields { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Fatal errors raised while starting or running the server binary.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_status_codes() {
        assert_eq!(ApiError::contact_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_fields_become_bad_request_with_fixed_message() {
        let err: ApiError = ContactError::MissingFields {
            missing: vec!["phone"],
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "All fields are required");
    }

    #[tokio::test]
    async fn response_body_carries_only_the_message() {
        let response = ApiError::contact_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Contact not found" }));
    }
}
