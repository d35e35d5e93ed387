use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// The kind of caller behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorRoleType {
    Anonymous,
    User,
    Internal,
    Administrator,
    System,
}

impl ActorRoleType {
    pub fn is_anonymous(self) -> bool {
        self == ActorRoleType::Anonymous
    }

    pub fn is_system(self) -> bool {
        self == ActorRoleType::System
    }

    pub fn not_system(self) -> bool {
        !self.is_system()
    }
}

/// The identity a request is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role_type: ActorRoleType,
    /// Where the request came from (client address, channel), when known.
    pub source: Option<String>,
}

impl Actor {
    pub const ANONYMOUS_ID: &'static str = "unknown";

    pub fn new(id: impl Into<String>, name: impl Into<String>, role_type: ActorRoleType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role_type,
            source: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(
            Self::ANONYMOUS_ID,
            Self::ANONYMOUS_ID,
            ActorRoleType::Anonymous,
        )
    }

    /// A regular user actor whose display name is its id.
    pub fn user(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(id.clone(), id, ActorRoleType::User)
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Request-scoped holder of the current [`Actor`].
///
/// One session is created per request and handed down the call chain.
/// Clones share the same slot, so a binding made by a middleware is visible
/// to the handler it dispatches to. Separately created sessions never observe
/// each other.
#[derive(Debug, Clone, Default)]
pub struct ActorSession {
    slot: Arc<RwLock<Option<Actor>>>,
}

impl ActorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relates an actor with this session, replacing any previous binding.
    pub fn bind(&self, actor: Actor) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(actor);
    }

    /// Clears the binding. Safe to call when nothing is bound.
    pub fn unbind(&self) {
        self.slot
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Returns the bound actor, or the anonymous actor when none is bound.
    pub fn current(&self) -> Actor {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_else(Actor::anonymous)
    }

    /// Binds `actor` until the returned guard is dropped.
    pub fn bind_scoped(&self, actor: Actor) -> ActorGuard {
        self.bind(actor);
        ActorGuard {
            session: self.clone(),
        }
    }
}

/// Unbinds its session on drop, including on unwinding and cancellation.
#[must_use = "the actor is unbound as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ActorGuard {
    session: ActorSession,
}

impl Drop for ActorGuard {
    fn drop(&mut self) {
        self.session.unbind();
    }
}
