//! HTTP port — plain `GET` returning status and body.

use std::future::Future;

use hostdash_domain::error::TransportError;

/// A received response. The body is kept as text; decoding happens in the
/// service so that every adapter reports shape errors the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outbound port for issuing `GET` requests against the host-management API.
///
/// Any response, whatever its status, is `Ok`. Only failures to obtain a
/// response at all are reported as [`TransportError`].
pub trait HttpClient {
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}
