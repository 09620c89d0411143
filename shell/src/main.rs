use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use users_core::Session;
use users_shell::{run_lines, write_frames, App, CliArgs, UreqTransport};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = args.config();
    let client = config.client()?;
    info!(base_url = %client.base_url(), "user directory shell starting");

    let mut app = App::new(Session::new(client), UreqTransport::new());
    let mut stdout = io::stdout().lock();

    if args.locations.is_empty() {
        write_frames(&mut stdout, &app.visit("/"))?;
        run_lines(&mut app, io::stdin().lock(), &mut stdout)?;
    } else {
        for location in &args.locations {
            write_frames(&mut stdout, &app.visit(location))?;
        }
    }
    Ok(())
}
