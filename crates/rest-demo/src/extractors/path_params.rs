//! Path capture extractor.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use common::AppError;

/// Path captures decoded like [`Path`], rejecting with the REST error body.
///
/// A capture that cannot be decoded means the request matched no route.
pub struct PathParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for PathParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| match e {
                PathRejection::FailedToDeserializePathParams(e) => {
                    tracing::debug!(error = %e.body_text(), "Undecodable path capture");
                    AppError::NoRoute
                }
                e => AppError::internal(e.body_text()),
            })?;

        Ok(PathParams(value))
    }
}
