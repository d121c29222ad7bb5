//! # RSVP CLI
//!
//! Command-line frontend for rsvp-app. It is the bootstrap: it loads
//! configuration, initialises logging, assembles the `AppCore` with a real
//! HTTP transport and a file-backed session, and maps subcommands onto UI
//! events.
//!
//! ```text
//! ┌─────────────────────────┐
//! │        rsvp-cli         │  ← THIS CRATE
//! │  clap args, handlers,   │
//! │  text rendering         │
//! └───────────┬─────────────┘
//!             ↓
//! ┌─────────────────────────┐
//! │        rsvp-app         │
//! │  workflows, reducer,    │
//! │  view models            │
//! └─────────────────────────┘
//! ```

#![allow(missing_docs)]

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rsvp_app::ui::UiAppCore;
use rsvp_app::{AppConfig, AppCore, FileSessionStore, HttpTransport, ReqwestTransport, SessionStore};

pub mod cli;
pub mod handlers;
pub mod render;

use cli::{Cli, Commands};
use handlers::HandlerContext;

/// Initialise logging. `RUST_LOG` wins; otherwise `--verbose` selects debug.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load configuration from `path`, or the platform default location.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let default_path = AppConfig::default_config_path();
    let path = path.or(default_path.as_deref());
    AppConfig::load(path).context("loading configuration")
}

/// Assemble the core with the production transport and session file.
pub fn build_app(config: AppConfig) -> Result<UiAppCore> {
    let session_path = config.session_file_path();
    let session = FileSessionStore::open(&session_path)
        .with_context(|| format!("opening session file {}", session_path.display()))?;
    let transport = ReqwestTransport::new(config.api_base_url.clone(), config.request_timeout())
        .context("building HTTP client")?;

    tracing::debug!(api = %config.api_base_url, session = %session_path.display(), "starting");

    Ok(assemble(config, Arc::new(transport), Arc::new(session)))
}

/// Assemble the core from explicit providers.
pub fn assemble(
    config: AppConfig,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
) -> UiAppCore {
    UiAppCore::from_core(AppCore::new(config, transport, session))
}

/// Run one parsed command and return its output.
pub async fn run(cli: Cli, app: UiAppCore) -> Result<String> {
    let ctx = HandlerContext::new(app, cli.json);

    match cli.command {
        Commands::Login { username, password } => {
            handlers::session::handle_login(&ctx, &username, password).await
        }
        Commands::Logout => handlers::session::handle_logout(&ctx).await,
        Commands::Status => handlers::status::handle_status(&ctx).await,
        Commands::Open { path } => handlers::status::handle_open(&ctx, &path).await,
        Commands::Categories(command) => {
            handlers::categories::handle_categories(&ctx, command).await
        }
        Commands::Invitations(command) => {
            handlers::invitations::handle_invitations(&ctx, command).await
        }
        Commands::Rsvps(command) => handlers::rsvps::handle_rsvps(&ctx, command).await,
        Commands::Guest(command) => handlers::guest::handle_guest(&ctx, command).await,
    }
}
