use crate::domain::actor::{Actor, ActorSession};
use axum::extract::{FromRequestParts, Request};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::convert::Infallible;

/// Header carrying the authenticated account id, set by the upstream auth layer.
///
/// The anonymous actor id is reserved; a header carrying it is ignored.
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Axum middleware giving every request its own [`ActorSession`].
///
/// The actor named by `x-actor-id` is bound for the lifetime of the request
/// and unbound when the response is produced, the handler fails, or the
/// request future is dropped. Without the header the request runs anonymous.
pub async fn bind_actor(mut req: Request, next: Next) -> Response {
    let session = ActorSession::new();
    let _guard = actor_from_headers(req.headers()).map(|actor| {
        tracing::debug!(actor_id = actor.id(), "actor bound");
        session.bind_scoped(actor)
    });
    req.extensions_mut().insert(session);
    next.run(req).await
}

fn actor_from_headers(headers: &HeaderMap) -> Option<Actor> {
    let id = headers
        .get(ACTOR_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && *id != Actor::ANONYMOUS_ID)?;
    let actor = Actor::user(id);
    let source = headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty());
    Some(match source {
        Some(source) => actor.with_source(source),
        None => actor,
    })
}

/// Extracts the actor of the current request. Never rejects.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .extensions
            .get::<ActorSession>()
            .map(ActorSession::current)
            .unwrap_or_else(Actor::anonymous);
        Ok(Self(actor))
    }
}
