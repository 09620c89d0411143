//! Text shell for the user directory.
//!
//! # Overview
//! Hosts a `users_core::Session`: reads locations, executes the loads the
//! session asks for over HTTP, and renders the root layout (navbar plus
//! outlet) as text after every navigation.
//!
//! # Design
//! - `transport` is the only module doing network I/O.
//! - `render` is pure and works on the session's `View`.
//! - `config` reads the environment once at startup; `cli` layers flags
//!   on top.

pub mod app;
pub mod cli;
pub mod config;
pub mod render;
pub mod transport;

pub use app::{run_lines, write_frames, App, HOME_COMMAND};
pub use cli::CliArgs;
pub use config::{ConfigError, ShellConfig};
pub use transport::UreqTransport;
