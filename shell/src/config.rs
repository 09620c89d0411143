//! Shell settings: API base URL and optional API key.
//!
//! Values come from `USERS_API_BASE` / `USERS_API_KEY`, and command-line
//! flags take precedence through [`ShellConfig::with_overrides`]. Blank
//! values count as unset.

use std::env;

use thiserror::Error;
use tracing::{info, warn};
use users_core::{BaseUrlError, UsersClient, DEFAULT_BASE_URL};

pub const BASE_URL_VAR: &str = "USERS_API_BASE";
pub const API_KEY_VAR: &str = "USERS_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("USERS_API_BASE is unusable: {0}")]
    BaseUrl(#[from] BaseUrlError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults for unset or
    /// blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = non_blank(lookup(BASE_URL_VAR)).unwrap_or_else(|| {
            info!("{BASE_URL_VAR} not set, using default: {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        let api_key = non_blank(lookup(API_KEY_VAR));
        if api_key.is_none() {
            warn!("{API_KEY_VAR} not set, requests go out without x-api-key");
        }
        Self { base_url, api_key }
    }

    /// Replace settings with the given values, skipping blank ones.
    pub fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(base_url) = non_blank(base_url) {
            self.base_url = base_url;
        }
        if let Some(api_key) = non_blank(api_key) {
            self.api_key = Some(api_key);
        }
        self
    }

    pub fn client(&self) -> Result<UsersClient, ConfigError> {
        let client = UsersClient::parse(&self.base_url)?;
        Ok(match &self.api_key {
            Some(key) => client.with_api_key(key.clone()),
            None => client,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
