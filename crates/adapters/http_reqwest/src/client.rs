//! `HttpClient` implementation over a shared `reqwest::Client`.

use std::time::Duration;

use reqwest::Url;

use hostdash_app::ports::{HttpClient, HttpResponse};
use hostdash_domain::error::TransportError;

use crate::error::ClientError;

/// Configuration for the reqwest HTTP adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL relative hrefs are resolved against (e.g. `http://localhost:1234`).
    pub base_url: String,
    /// Upper bound for a whole request, body included.
    ///
    /// The browser dashboard sets no timeout and waits as long as the browser
    /// does, so a slow API shows up here as a transport error instead.
    pub timeout: Duration,
}

impl Config {
    /// Build a [`ReqwestClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the base URL is not an
    /// absolute http(s) URL, or [`ClientError::Build`] if reqwest fails to
    /// initialise its TLS backend.
    pub fn build(self) -> Result<ReqwestClient, ClientError> {
        let base_url = parse_base_url(&self.base_url)?;
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(ReqwestClient { http, base_url })
    }
}

/// Parse and check a base URL.
///
/// # Errors
///
/// Returns [`ClientError::InvalidBaseUrl`] unless `raw` is an absolute
/// `http` or `https` URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let invalid = |message: String| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        message,
    };
    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

/// Native HTTP client for the host-management API.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ReqwestClient {
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `href` the way a browser would against the page URL: absolute
    /// URLs are kept, paths are joined onto the base.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when `href` cannot be joined.
    pub fn resolve(&self, href: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(href)
            .map_err(|err| TransportError::new(href, err.to_string()))
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let target = self.resolve(url)?;
        tracing::trace!(%target, "sending request");

        let response = self
            .http
            .get(target)
            .send()
            .await
            .map_err(|err| TransportError::new(url, err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError::new(url, err.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
