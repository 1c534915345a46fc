//! Adapter construction errors.

/// Errors raised while building a [`ReqwestClient`](crate::ReqwestClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The base URL is not an absolute `http`/`https` URL.
    #[error("invalid base url {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// The underlying reqwest client could not be built.
    #[error("failed to build http client")]
    Build(#[from] reqwest::Error),
}
