//! # hostdash-domain
//!
//! Pure domain model for the hostdash host-management dashboard.
//!
//! ## Responsibilities
//! - Payload shapes returned by the host-management API: host descriptors,
//!   host list entries (with their `self` links) and log entries
//! - Validated JSON decoding at the boundary
//! - The HTTP status checks that decide whether a response is a success
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod payload;
pub mod status;

pub mod host;
pub mod link;
pub mod log;
