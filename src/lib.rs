//! # pantry-client
//!
//! Client-side core for the receipt-scanning pantry front-end.
//!
//! The crate holds the pieces of the front-end that decide things rather than
//! draw them: the persisted login session, the navigation guard that runs
//! ahead of every page render, and the typed REST client for the backend's
//! resources (accounts, receipts, inventory, recipes, health profile).
//!
//! Rendering stays with the host UI. A page calls [`router::Router::navigate`]
//! before it commits and an [`api::ApiClient`] operation once it renders;
//! both read the same [`session::SessionStore`].

pub mod api;
pub mod config;
pub mod router;
pub mod session;

pub use api::{ApiClient, ApiError};
pub use config::{ClientConfig, ConfigError};
pub use router::{NavigationDecision, Router};
pub use session::{Session, SessionStore};
