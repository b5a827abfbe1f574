//! Request extractors that report failures as [`ApiError`].
//!
//! axum's stock `Json` and `Path` extractors reject with their own status
//! codes (415, 422, plain-text bodies). These wrappers turn every rejection
//! into a `400 {"message": ...}` so clients see one error shape.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;
use contacts_store::ContactId;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejection is [`ApiError::BadRequest`].
///
/// An empty body stands for "no fields" and yields `T::default()`, whatever
/// the content type. A non-empty body must be declared as JSON and parse.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        if bytes.is_empty() {
            return Ok(ApiJson(T::default()));
        }
        if !declared_json {
            return Err(ApiError::BadRequest(
                "Invalid JSON body: Expected request with `Content-Type: application/json`"
                    .to_string(),
            ));
        }
        Json::<T>::from_bytes(&bytes)
            .map(|Json(value)| ApiJson(value))
            .map_err(json_rejection)
    }
}

/// `application/json` or any `+json` suffix type, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
}

/// The `{id}` path segment of `/contacts/{id}`, parsed as a [`ContactId`].
#[derive(Debug, Clone, Copy)]
pub struct ContactIdParam(pub ContactId);

impl<S> FromRequestParts<S> for ContactIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        parse_contact_id(&raw).map(ContactIdParam)
    }
}

/// Parses a decimal contact id. Signs, whitespace, and trailing garbage are
/// rejected.
pub fn parse_contact_id(raw: &str) -> Result<ContactId, ApiError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::BadRequest(format!("Invalid contact id: {raw}")));
    }
    raw.parse::<u64>()
        .map(ContactId)
        .map_err(|_| ApiError::BadRequest(format!("Invalid contact id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimal_ids() {
        assert_eq!(parse_contact_id("1").unwrap(), ContactId(1));
        assert_eq!(parse_contact_id("0042").unwrap(), ContactId(42));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        for raw in ["", "abc", "1abc", "-1", "+1", " 1", "1.5"] {
            let err = parse_contact_id(raw).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "{raw:?} accepted");
        }
    }

    #[test]
    fn recognises_json_content_types() {
        let with = |value: &'static str| {
            let mut headers = HeaderMap::new();
            headers.insert(CONTENT_TYPE, value.parse().unwrap());
            headers
        };
        assert!(is_json_content_type(&with("application/json")));
        assert!(is_json_content_type(&with("Application/JSON; charset=utf-8")));
        assert!(is_json_content_type(&with("application/merge-patch+json")));
        assert!(!is_json_content_type(&with("text/plain")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn rejects_ids_beyond_u64() {
        assert!(parse_contact_id("99999999999999999999999").is_err());
    }
}
