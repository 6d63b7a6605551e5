//! API client module for the board backend.
//!
//! Provides the hook-driven base client, the typed `/usr/` endpoint client,
//! a pluggable transport, and request/response types matching the backend.

pub mod client;
pub mod error;
pub mod hooks;
pub mod main_api;
pub mod transport;
pub mod types;


pub use client::ApiClient;
pub use error::{ApiError, TransportError};
pub use hooks::{Hooks, RequestConfig};
pub use main_api::MainApi;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use types::{Article, Envelope, JoinRequest};
