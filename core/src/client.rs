//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `UsersClient` holds the base URL and a fixed header set and carries no
//! mutable state between calls. Each fetch is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the round-trip, so the core stays
//! deterministic and free of I/O.
//!
//! URLs are assembled with `url::Url` so a user id lands in exactly one path
//! segment and the page number is a proper query pair.

use std::num::NonZeroU32;

use tracing::info;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{UserEnvelope, UserPage};

/// Base URL of the public demo API.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

const API_KEY_HEADER: &str = "x-api-key";

/// Rejected base URLs.
#[derive(Debug, thiserror::Error)]
pub enum BaseUrlError {
    #[error("invalid base URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("base URL cannot carry path segments: {0}")]
    NotHierarchical(String),
}

/// Synchronous, stateless client for the users API.
#[derive(Debug, Clone)]
pub struct UsersClient {
    base_url: Url,
    headers: Vec<(String, String)>,
}

impl UsersClient {
    pub fn new(base_url: Url) -> Result<Self, BaseUrlError> {
        if base_url.cannot_be_a_base() {
            return Err(BaseUrlError::NotHierarchical(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    pub fn parse(base_url: &str) -> Result<Self, BaseUrlError> {
        Self::new(Url::parse(base_url)?)
    }

    /// Send `key` as `x-api-key` on every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.headers.push((API_KEY_HEADER.to_string(), key.into()));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET <base>/users?page={page}`
    pub fn build_list_users(&self, page: NonZeroU32) -> HttpRequest {
        info!(page = page.get(), "fetching users");
        let mut url = self.endpoint(&["users"]);
        url.query_pairs_mut()
            .append_pair("page", &page.get().to_string());
        self.request(url)
    }

    /// `GET <base>/users/{user_id}`
    pub fn build_get_user(&self, user_id: &str) -> HttpRequest {
        info!(user_id, "fetching user");
        self.request(self.endpoint(&["users", user_id]))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<UserPage, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<UserEnvelope, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // Checked in `new`: hierarchical URLs always yield segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, url: Url) -> HttpRequest {
        HttpRequest {
            url: url.into(),
            headers: self.headers.clone(),
        }
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
