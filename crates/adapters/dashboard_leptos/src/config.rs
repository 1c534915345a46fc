//! Endpoint configuration read from the host page.
//!
//! `<body data-hosts-url="…" data-logs-url="…">` overrides the default
//! collection URLs.

use hostdash_app::services::Endpoints;

/// Settings of the browser dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub endpoints: Endpoints,
}

impl DashboardConfig {
    /// Read the `data-*` attributes of `<body>`, falling back to defaults
    /// when the document or an attribute is missing.
    #[must_use]
    pub fn from_document() -> Self {
        let dataset = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .map(|body| body.dataset());
        Self::from_lookup(|key| dataset.as_ref().and_then(|data| data.get(key)))
    }

    /// Build from a dataset-style lookup (camel-cased keys).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Endpoints::default();
        Self {
            endpoints: Endpoints {
                hosts: lookup("hostsUrl").unwrap_or(defaults.hosts),
                logs: lookup("logsUrl").unwrap_or(defaults.logs),
            },
        }
    }
}
