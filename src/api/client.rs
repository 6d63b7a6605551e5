//! Base HTTP client with hook-driven request/response interception.
//!
//! Every exchange runs the same pipeline: request hook, URL construction,
//! transport send, status check, response hook, envelope decode. Failures
//! are classified into [`ApiError`] variants and reported to the injected
//! [`Notifier`] before being returned to the caller.

use std::sync::Arc;

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::hooks::{Hooks, RequestConfig};
use super::transport::{HttpRequest, Transport};
use super::types::Envelope;
use crate::ui::{Alert, Notifier};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// HTTP client wrapper for board API communication.
pub struct ApiClient<T: Transport> {
    transport: T,
    base_url: String,
    hooks: Hooks,
    notifier: Arc<dyn Notifier>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str, hooks: Hooks, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            hooks,
            notifier,
        }
    }

    /// Send a GET to a path relative to the base URL.
    pub async fn get<B: DeserializeOwned>(&self, path: &str) -> Result<Envelope<B>, ApiError> {
        self.request(RequestConfig::new(Method::GET, path)).await
    }

    /// POST `fields` as an `application/x-www-form-urlencoded` body.
    ///
    /// Headers are always the form content type plus `Accept: */*`; there
    /// is no way to pass caller-specific request options through this helper.
    pub async fn post_by_form<B: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, String)],
    ) -> Result<Envelope<B>, ApiError> {
        let mut config = RequestConfig::new(Method::POST, path);
        config
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        config.headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        config.body = Some(encode_form(fields).into_bytes());

        self.request(config).await
    }

    /// Run one exchange through the hook pipeline and decode the envelope.
    pub async fn request<B: DeserializeOwned>(
        &self,
        config: RequestConfig,
    ) -> Result<Envelope<B>, ApiError> {
        let config = (self.hooks.on_request)(config);
        let request = self.build_request(config).map_err(|e| self.handle_error(e))?;

        log::debug!("{} {}", request.method, request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| self.handle_error(e.into()))?;

        if !response.status.is_success() {
            let body = String::from_utf8_lossy(&response.body).into_owned();
            return Err(self.handle_error(ApiError::Status {
                status: response.status,
                body,
            }));
        }

        let response = (self.hooks.on_response)(response);

        Envelope::from_slice(&response.body).map_err(|e| {
            log::warn!("Failed to parse response envelope: {}", e);
            ApiError::Decode(e)
        })
    }

    fn build_request(&self, config: RequestConfig) -> Result<HttpRequest, ApiError> {
        let joined = format!("{}/{}", self.base_url, config.path.trim_start_matches('/'));
        let mut url = Url::parse(&joined)
            .map_err(|e| ApiError::Request(format!("invalid URL {}: {}", joined, e)))?;

        if !config.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &config.params {
                pairs.append_pair(key, value);
            }
        }

        Ok(HttpRequest {
            method: config.method,
            url,
            headers: config.headers,
            body: config.body,
        })
    }

    /// Surface a failure to the user (or the log) and hand it back.
    fn handle_error(&self, err: ApiError) -> ApiError {
        match &err {
            ApiError::Status { .. } => self.notifier.alert(&Alert::RequestFailed),
            ApiError::NoResponse(_) => self.notifier.alert(&Alert::NetworkUnavailable),
            ApiError::Request(reason) => log::error!("Error {}", reason),
            ApiError::Decode(_) | ApiError::Rejected { .. } => {}
        }
        err
    }
}

/// Percent-encode an ordered field list as a form body.
pub fn encode_form(fields: &[(&str, String)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
