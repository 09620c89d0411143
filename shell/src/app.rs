//! Drives a `Session` from text input.
//!
//! Each visit renders the pending frame, executes the load over the
//! transport, then renders the settled frame. The `home` command stands in
//! for the not-found view's button.

use std::io::{BufRead, Write};

use tracing::debug;
use users_core::Session;

use crate::render::render;
use crate::transport::UreqTransport;

/// Input that triggers the not-found view's recovery action.
pub const HOME_COMMAND: &str = "home";

/// The shell: a session plus the transport that executes its loads.
pub struct App {
    session: Session,
    transport: UreqTransport,
}

impl App {
    pub fn new(session: Session, transport: UreqTransport) -> Self {
        Self { session, transport }
    }

    /// Handle one line of input and return the frames it produced: the
    /// pending placeholder first when a loader runs, then the settled view.
    pub fn visit(&mut self, input: &str) -> Vec<String> {
        let input = input.trim();
        let load = if input == HOME_COMMAND {
            self.session.go_home()
        } else {
            self.session.navigate(input)
        };

        let Some(load) = load else {
            return vec![render(&self.session)];
        };
        let pending = render(&self.session);
        let outcome = self.transport.execute(load.request());
        if !self.session.settle(&load, outcome) {
            debug!(generation = load.generation(), "load superseded before it settled");
        }
        vec![pending, render(&self.session)]
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// Visit every non-empty line of `input`, writing each frame to `out`.
pub fn run_lines<R: BufRead, W: Write>(app: &mut App, input: R, out: &mut W) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        write_frames(out, &app.visit(&line))?;
    }
    Ok(())
}

pub fn write_frames<W: Write>(out: &mut W, frames: &[String]) -> std::io::Result<()> {
    for frame in frames {
        writeln!(out, "{frame}")?;
        writeln!(out, "----")?;
    }
    out.flush()
}
