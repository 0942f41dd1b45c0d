//! `ValidatedJson` extractor: deserializes a JSON body and runs `validator` rules.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// A JSON body that has passed its `Validate` rules.
///
/// Malformed JSON keeps axum's own rejection status; rule violations become
/// a `400` with the failing fields in `details`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        value
            .validate()
            .map_err(|e| ApiError::from(e).into_response())?;

        Ok(Self(value))
    }
}
