//! Request/response interception points for [`ApiClient`](super::client::ApiClient).

use std::fmt;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::Method;

use super::transport::HttpResponse;

/// Outgoing request before URL construction.
///
/// `path` is relative to the client's base URL and may carry its own query
/// string. `params` are appended after it when the URL is built.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl RequestConfig {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

pub type RequestHook = Arc<dyn Fn(RequestConfig) -> RequestConfig + Send + Sync>;
pub type ResponseHook = Arc<dyn Fn(HttpResponse) -> HttpResponse + Send + Sync>;

/// The pair of hooks a client runs around every exchange.
///
/// `on_request` runs before every request is built and sent; `on_response`
/// runs after every 2xx response, before the body reaches the caller.
/// Both default to identity.
#[derive(Clone)]
pub struct Hooks {
    pub on_request: RequestHook,
    pub on_response: ResponseHook,
}

impl Hooks {
    pub fn identity() -> Self {
        Self {
            on_request: Arc::new(|config| config),
            on_response: Arc::new(|response| response),
        }
    }

    pub fn with_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(RequestConfig) -> RequestConfig + Send + Sync + 'static,
    {
        self.on_request = Arc::new(hook);
        self
    }

    pub fn with_response<F>(mut self, hook: F) -> Self
    where
        F: Fn(HttpResponse) -> HttpResponse + Send + Sync + 'static,
    {
        self.on_response = Arc::new(hook);
        self
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}
