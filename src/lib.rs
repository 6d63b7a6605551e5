//! Typed HTTP client for the board backend.
//!
//! [`api::MainApi`] exposes the article and member endpoints. Every request
//! passes through a hook pipeline that injects the stored auth key and
//! reacts to expired sessions by clearing local state and redirecting to
//! the login page. Presentation concerns (alerts, navigation) and session
//! storage are injected, see [`ui`] and [`session`].

pub mod api;
pub mod commands;
pub mod config;
pub mod session;
pub mod state;
pub mod ui;

pub use api::{ApiError, Envelope, MainApi};
pub use config::ClientConfig;
pub use session::{Session, SessionKey, SessionStore};
