//! HTTP client wrapping `gloo-net`, implementing the `HttpClient` port.
//!
//! Relative URLs are resolved by the browser against the page.

use gloo_net::http::Request;
use hostdash_app::ports::{HttpClient, HttpResponse};
use hostdash_domain::error::TransportError;

/// Browser `fetch` client.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient;

impl HttpClient for GlooClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|err| TransportError::new(url, err.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| TransportError::new(url, err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
