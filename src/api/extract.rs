//! Request extractors that turn malformed input into [`ApiError`]s instead of
//! axum's default rejections.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::models::TodoId;

/// The `{id}` path segment parsed as an integer.
///
/// An id that does not parse can never match a stored todo, so it is
/// answered with 404 like any other unknown id.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        raw.parse().map(Self).map_err(|_| {
            tracing::debug!("Non-numeric todo id: {:?}", raw);
            ApiError::NotFound
        })
    }
}

/// JSON object body.
///
/// Only `application/json` requests are parsed; any other (or missing)
/// content type, like an empty body, is read as `T::default()`. A JSON body
/// that is not an object is rejected; inside the object every field is
/// taken as-is.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if !value.is_object() {
            return Err(ApiError::BadRequest("expected a JSON object".to_string()));
        }

        serde_json::from_value(value)
            .map(Self)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}
