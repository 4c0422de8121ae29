//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Integer record id from the `{id}` path segment.
///
/// A segment that is not an integer cannot name a row, so it is reported
/// as not found rather than as a malformed request.
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "page",
                id: parts.uri.path().to_owned(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            resource: "record",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}

/// URL-encoded form body where every field of `T` is required.
///
/// Any rejection (absent field, wrong content type) becomes a 400.
pub struct FormData<T>(pub T);

impl<S, T> FromRequest<S> for FormData<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "form rejected");
            ApiError::BadRequest {
                message: rejection.body_text(),
            }
        })?;

        Ok(Self(value))
    }
}
