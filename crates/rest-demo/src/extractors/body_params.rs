//! Decoded request body extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use common::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Body fields decoded from either a JSON or a form-encoded request body.
///
/// An empty body decodes to `T::default()`, so every field reads as missing.
pub struct BodyParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BodyParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with(FORM_CONTENT_TYPE));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            return Ok(BodyParams(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(BodyParams(T::default()));
        }

        let Json(value) =
            Json::<T>::from_bytes(&bytes).map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(BodyParams(value))
    }
}
