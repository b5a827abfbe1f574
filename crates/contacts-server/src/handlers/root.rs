//! Root and fallback handlers.

use axum::http::StatusCode;
use axum::Json;

use crate::schema::common::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Backend Deployed Successfully";

/// Welcome / liveness probe.
///
/// `GET /`
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}

/// Answers any unmatched route.
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Route not found")),
    )
}
