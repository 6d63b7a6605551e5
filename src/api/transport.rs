//! Pluggable HTTP transport.
//!
//! The API client never talks to reqwest directly; it hands a fully built
//! [`HttpRequest`] to a [`Transport`]. Production uses [`ReqwestTransport`],
//! tests substitute a recording implementation.

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode, Url};

use super::error::TransportError;
use crate::config::ClientConfig;

/// A request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// A completed response, body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Trait abstracting the network exchange for testability.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send the request and read the whole response body.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::Build(err.to_string())
    } else if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::CONTENT_TYPE;

    fn request(method: Method, url: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: Url::parse(url).unwrap(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_reads_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/usr/ping")
            .with_status(404)
            .with_header("content-type", "text/plain")
            .with_body("missing")
            .create_async()
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default());
        let resp = transport
            .send(request(Method::GET, &format!("{}/usr/ping", server.url())))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body, b"missing");
        assert_eq!(resp.headers.get(CONTENT_TYPE).unwrap(), "text/plain");
    }

    #[tokio::test]
    async fn test_sends_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/usr/echo")
            .match_body("a=1&b=2")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let transport = ReqwestTransport::new(&ClientConfig::default());
        let mut req = request(Method::POST, &format!("{}/usr/echo", server.url()));
        req.body = Some(b"a=1&b=2".to_vec());
        let resp = transport.send(req).await.unwrap();

        mock.assert_async().await;
        assert!(resp.status.is_success());
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_network_failure() {
        let transport = ReqwestTransport::new(&ClientConfig::default());
        let err = transport
            .send(request(Method::GET, "http://127.0.0.1:1/usr/ping"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Connection(_)), "got {:?}", err);
    }
}
