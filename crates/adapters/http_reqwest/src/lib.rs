//! # hostdash-adapter-http-reqwest
//!
//! HTTP client adapter built on [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the `HttpClient` port defined in `hostdash-app::ports::http`
//! - Resolve the relative hrefs served by the API against a configured base URL
//! - Apply a per-request timeout
//!
//! ## Dependency rule
//! Depends on `hostdash-app` (for the port trait) and `hostdash-domain` (for
//! error types). The `app` and `domain` crates must never reference this adapter.

pub mod client;
pub mod error;

pub use client::{Config, ReqwestClient};
pub use error::ClientError;
