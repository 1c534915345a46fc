//! # hostdash-app
//!
//! Application layer — use-cases, view models and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`HttpClient` port** that adapters implement (reqwest on
//!   native targets, gloo-net in the browser)
//! - Define the **loaders** as use-case methods on `DashboardService`:
//!   - `fetch_host` — one host descriptor for one host view
//!   - `fetch_host_links` — the alive-host collection
//!   - `fetch_logs` — the log collection
//! - Provide the **view models** (`HostView`, `LogPanel`, `Dashboard`) that
//!   own the rendered state, independent of any UI toolkit
//!
//! ## Dependency rule
//! Depends on `hostdash-domain` only (plus `futures` for joining requests).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//! Futures are not required to be `Send`, so the same code runs on the
//! browser event loop and on a tokio runtime.

pub mod host_view;
pub mod page;
pub mod ports;
pub mod services;
