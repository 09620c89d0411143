//! Route loading core for the user directory.
//!
//! # Overview
//! Matches locations to routes, validates search parameters, decides when a
//! route's loader has to run, and builds/parses the HTTP requests of the
//! users API without touching the network (host-does-IO pattern). The host
//! executes each request and reports the outcome back, which keeps the core
//! deterministic and testable.
//!
//! # Design
//! - `UsersClient` is stateless: base URL plus fixed headers.
//! - Each fetch is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `Session` is the routing layer: one `LoaderSlot` per active route
//!   instance, generation-tagged so superseded responses are dropped.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod loader;
pub mod route;
pub mod search;
pub mod session;
pub mod types;

pub use client::{BaseUrlError, UsersClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use loader::{should_refetch, LoadState, LoadTicket, LoaderDeps, LoaderSlot};
pub use route::{Location, Route};
pub use search::UsersSearch;
pub use session::{NavLink, PendingLoad, Session, View};
pub use types::{LoaderData, Support, UserEnvelope, UserPage, UserRecord};
