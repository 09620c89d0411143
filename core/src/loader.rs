//! Route loaders and the per-route result slot.
//!
//! # Design
//! A loader is described by its dependency value ([`LoaderDeps`]). The deps
//! know which request to build and how to parse the answer, so the session
//! never fetches on behalf of a view.
//!
//! [`LoaderSlot`] belongs to the active route instance. Every fetch it starts
//! is stamped with a generation; an outcome is stored only when its ticket
//! still carries the current generation, so a slow response for page 1 can
//! never overwrite page 2 that was requested later.

use std::num::NonZeroU32;

use tracing::{debug, warn};

use crate::client::UsersClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::LoaderData;

/// The value a route's loader depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderDeps {
    Users { page: NonZeroU32 },
    User { user_id: String },
}

impl LoaderDeps {
    pub fn build_request(&self, client: &UsersClient) -> HttpRequest {
        match self {
            Self::Users { page } => client.build_list_users(*page),
            Self::User { user_id } => client.build_get_user(user_id),
        }
    }

    pub fn parse_response(
        &self,
        client: &UsersClient,
        response: HttpResponse,
    ) -> Result<LoaderData, ApiError> {
        match self {
            Self::Users { .. } => client.parse_list_users(response).map(LoaderData::Users),
            Self::User { .. } => client.parse_get_user(response).map(LoaderData::User),
        }
    }
}

/// Whether moving from `previous` to `next` requires running the loader.
pub fn should_refetch<D: PartialEq>(previous: Option<&D>, next: &D) -> bool {
    previous != Some(next)
}

/// Proof that a fetch was started, carried back to [`LoaderSlot::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket<D> {
    generation: u64,
    deps: D,
}

impl<D> LoadTicket<D> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn deps(&self) -> &D {
        &self.deps
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(ApiError),
}

/// Result holder scoped to one route instance.
#[derive(Debug)]
pub struct LoaderSlot<D, T> {
    generation: u64,
    deps: Option<D>,
    state: LoadState<T>,
}

impl<D, T> Default for LoaderSlot<D, T> {
    fn default() -> Self {
        Self {
            generation: 0,
            deps: None,
            state: LoadState::Idle,
        }
    }
}

impl<D: Clone + PartialEq + std::fmt::Debug, T> LoaderSlot<D, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch for `deps` unless the slot already holds (or awaits)
    /// data for the same value.
    pub fn begin(&mut self, deps: D) -> Option<LoadTicket<D>> {
        if !should_refetch(self.deps.as_ref(), &deps) {
            debug!(?deps, "loader deps unchanged, keeping current data");
            return None;
        }
        self.generation += 1;
        self.deps = Some(deps.clone());
        self.state = LoadState::Pending;
        Some(LoadTicket {
            generation: self.generation,
            deps,
        })
    }

    /// Store the outcome of `ticket`. Returns `false` and drops the outcome
    /// when a newer fetch (or a `clear`) superseded it.
    pub fn settle(&mut self, ticket: &LoadTicket<D>, outcome: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                deps = ?ticket.deps,
                "discarding stale loader result"
            );
            return false;
        }
        self.state = match outcome {
            Ok(data) => LoadState::Ready(data),
            Err(err) => {
                warn!(deps = ?ticket.deps, error = %err, "loader failed");
                LoadState::Failed(err)
            }
        };
        true
    }

    /// Forget the current data and invalidate any outstanding ticket.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.deps = None;
        self.state = LoadState::Idle;
    }

    pub fn is_current(&self, ticket: &LoadTicket<D>) -> bool {
        ticket.generation == self.generation && self.deps.as_ref() == Some(&ticket.deps)
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn deps(&self) -> Option<&D> {
        self.deps.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
