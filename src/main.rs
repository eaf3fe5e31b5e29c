//! Specter - terminal front-end for the spec-to-docs generator
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates: specter-app owns state and updates, specter-tui the
//! rendering and event loop, specter-backend the generator client.

use clap::Parser;

use specter_app::config;
use specter_core::prelude::*;

/// Edit API specs and drive the documentation generator from a terminal
#[derive(Parser, Debug)]
#[command(name = "specter")]
#[command(about = "Terminal client for the spec-to-docs generator", long_about = None)]
struct Args {
    /// Generator server base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// HTTP timeout in seconds for generator requests
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    specter_core::logging::init()?;

    // Write a commented default config on first run; a read-only config
    // directory is not fatal
    if let Err(e) = config::ensure_config_file() {
        warn!("Could not create default config file: {e}");
    }

    let mut settings = config::load_settings();
    if let Some(server) = args.server {
        settings.server.url = server;
    }
    if let Some(timeout) = args.timeout {
        settings.server.timeout_secs = timeout;
    }

    let result = specter_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Specter exiting");
    result
}
