//! Command-line arguments of the `users-shell` binary.

use clap::Parser;

use crate::config::ShellConfig;

/// `users-shell` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "users-shell",
    about = "Browse the users directory as text, one location per line",
    version
)]
pub struct CliArgs {
    /// API base URL. Falls back to `USERS_API_BASE` when omitted.
    #[arg(long = "base-url", value_name = "url")]
    pub base_url: Option<String>,
    /// Key sent as `x-api-key`. Falls back to `USERS_API_KEY` when omitted.
    #[arg(long = "api-key", value_name = "key")]
    pub api_key: Option<String>,
    /// Locations to visit in order. Reads stdin when none are given.
    #[arg(value_name = "location")]
    pub locations: Vec<String>,
}

impl CliArgs {
    /// Settings from the flags, with the environment filling the gaps.
    pub fn config(&self) -> ShellConfig {
        self.config_with(ShellConfig::from_env())
    }

    pub fn config_with(&self, from_env: ShellConfig) -> ShellConfig {
        from_env.with_overrides(self.base_url.clone(), self.api_key.clone())
    }
}
