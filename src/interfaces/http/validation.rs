use crate::domain::constraints::{Validate, Violation};
use crate::error::AssetError;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor that runs [`Validate`] before the handler.
///
/// Undecodable bodies and constraint violations both short-circuit with
/// `AssetError::Validation`, so the handler only ever sees checked input.
pub struct Valid<T: Validate>(pub T::Output);

impl<S, T> FromRequest<S> for Valid<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AssetError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "undecodable payload");
                AssetError::Validation(vec![Violation::new("body", rejection.body_text())])
            })?;
        payload.validate().map(Valid).map_err(|violations| {
            tracing::debug!(?violations, "payload rejected");
            AssetError::Validation(violations)
        })
    }
}
