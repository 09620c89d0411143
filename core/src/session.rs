//! Navigation session: the routing layer the views sit on.
//!
//! # Design
//! `Session` owns the current location, the matched route and the loader
//! slot of that route instance. `navigate` never performs I/O; when the new
//! route's loader has to run it returns a [`PendingLoad`] for the host to
//! execute, and the host reports back through `settle`. Until then `view`
//! yields the pending placeholder.

use std::num::NonZeroU32;

use tracing::info;

use crate::client::UsersClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::loader::{LoadState, LoadTicket, LoaderDeps, LoaderSlot};
use crate::route::{Location, Route};
use crate::search::UsersSearch;
use crate::types::{LoaderData, UserPage, UserRecord};

/// Page the navbar's Users link opens.
pub const USERS_LINK_PAGE: NonZeroU32 = NonZeroU32::MIN.saturating_add(1);

/// A loader run the host still has to execute.
#[derive(Debug, Clone)]
pub struct PendingLoad {
    ticket: LoadTicket<LoaderDeps>,
    request: HttpRequest,
}

impl PendingLoad {
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn deps(&self) -> &LoaderDeps {
        self.ticket.deps()
    }

    pub fn generation(&self) -> u64 {
        self.ticket.generation()
    }
}

/// What the outlet shows for the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Home,
    About,
    Pending,
    Error(&'a ApiError),
    NotFound,
    UserList {
        search: UsersSearch,
        page: &'a UserPage,
    },
    UserDetail(&'a UserRecord),
}

/// One entry of the root layout's navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug)]
pub struct Session {
    client: UsersClient,
    location: Location,
    route: Route,
    slot: LoaderSlot<LoaderDeps, LoaderData>,
}

impl Session {
    /// A session parked on `/`, which has no loader.
    pub fn new(client: UsersClient) -> Self {
        Self {
            client,
            location: Location::parse("/"),
            route: Route::Home,
            slot: LoaderSlot::new(),
        }
    }

    pub fn navigate(&mut self, raw: &str) -> Option<PendingLoad> {
        let location = Location::parse(raw);
        let route = Route::resolve(&location);
        info!(location = %location, "navigating");

        let pending = match route.loader_deps() {
            Some(deps) => self.slot.begin(deps).map(|ticket| PendingLoad {
                request: ticket.deps().build_request(&self.client),
                ticket,
            }),
            None => {
                self.slot.clear();
                None
            }
        };
        self.location = location;
        self.route = route;
        pending
    }

    /// Recovery action of the not-found view.
    pub fn go_home(&mut self) -> Option<PendingLoad> {
        self.navigate("/")
    }

    /// Hand the host's outcome for `load` to the route's slot. Returns
    /// `false` when a later navigation already superseded the load.
    pub fn settle(&mut self, load: &PendingLoad, response: Result<HttpResponse, ApiError>) -> bool {
        let outcome =
            response.and_then(|response| load.deps().parse_response(&self.client, response));
        self.slot.settle(&load.ticket, outcome)
    }

    pub fn view(&self) -> View<'_> {
        match (&self.route, self.slot.state()) {
            (Route::Home, _) => View::Home,
            (Route::About, _) => View::About,
            (Route::NotFound, _) => View::NotFound,
            (_, LoadState::Idle | LoadState::Pending) => View::Pending,
            (_, LoadState::Failed(err)) => View::Error(err),
            (route, LoadState::Ready(LoaderData::Users(page))) => View::UserList {
                search: match route {
                    Route::Users(search) => *search,
                    _ => UsersSearch::default(),
                },
                page,
            },
            (_, LoadState::Ready(LoaderData::User(envelope))) => View::UserDetail(&envelope.data),
        }
    }

    /// The completed loader result of the current route, if any.
    pub fn loader_data(&self) -> Option<&LoaderData> {
        match self.slot.state() {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.slot.state(), LoadState::Pending)
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        [
            ("Home", Route::Home),
            ("About", Route::About),
            ("Users", Route::Users(UsersSearch::new(USERS_LINK_PAGE))),
        ]
        .into_iter()
        .filter_map(|(label, target)| {
            Some(NavLink {
                label,
                active: target.is_active_for(&self.route),
                href: target.href()?,
            })
        })
        .collect()
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn client(&self) -> &UsersClient {
        &self.client
    }
}
