//! # RSVP App - Portable Headless Application Core
//!
//! Client core for a wedding RSVP service: an administrator control panel
//! (categories, invitations, RSVPs) and a public guest reply form, backed by
//! a JSON REST API.
//!
//! ## Architecture
//!
//! ```text
//! frontend event ─► presentation::events ─► workflows ─► ApiClient ─► HttpTransport
//!                                                │
//!                                                ▼
//!                                  AppCore::dispatch(Action)
//!                                                │
//!                                    core::reduce(ViewState, Action)
//!                                                │
//!                                                ▼
//!                       watch::Sender<ViewState> ─► presentation view models
//! ```
//!
//! - [`views`]: plain data slices of the root [`views::ViewState`]
//! - [`core`]: actions, the pure reducer and the [`AppCore`] container
//! - [`workflows`]: one REST call each, translated into actions
//! - [`presentation`]: view models, formatting, validation and UI handlers
//! - [`transport`] / [`session`]: injected HTTP and token storage providers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rsvp_app::{AppConfig, AppCore, MemorySessionStore, ReqwestTransport};
//!
//! let config = AppConfig::load(None)?;
//! let transport = ReqwestTransport::new(&config.api_base_url, config.request_timeout())?;
//! let core = AppCore::new(config, Arc::new(transport), Arc::new(MemorySessionStore::new()));
//! let app_core = Arc::new(RwLock::new(core));
//!
//! rsvp_app::workflows::fetch_categories(&app_core).await?;
//! ```

pub mod config;
pub mod core;
pub mod errors;
pub mod presentation;
pub mod routes;
pub mod session;
pub mod transport;
pub mod ui;
pub mod views;
pub mod workflows;

pub use crate::config::AppConfig;
pub use crate::core::{Action, AppCore};
pub use crate::errors::{ApiError, ConfigError, ErrorCategory, LoginError, SessionError};
pub use crate::routes::Route;
pub use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use crate::transport::{ApiClient, HttpTransport, ReqwestTransport};
pub use crate::views::ViewState;
