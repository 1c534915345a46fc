//! Application services — use-case orchestration.

pub mod dashboard_service;

pub use dashboard_service::{DashboardService, Endpoints, HostLinks, HostOutcome, LogsOutcome};
