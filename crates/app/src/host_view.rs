//! Host view — the rendered state of one managed host.

use hostdash_domain::host::{HostDescriptor, Paths, UNDETERMINED_STATUS, paths_json};

use crate::services::HostOutcome;

/// Text currently shown by the three display regions of a view.
///
/// All three start empty and are overwritten together on every load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    pub name: String,
    pub status: String,
    pub paths: String,
}

/// State of one host view, bound to the URL of its descriptor.
///
/// Each view owns its regions, so views never share display state.
#[derive(Debug, Clone, PartialEq)]
pub struct HostView {
    url: String,
    name: Option<String>,
    status: String,
    paths: Paths,
    regions: Regions,
    error: Option<String>,
}

impl HostView {
    /// Create an unloaded view bound to `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            status: UNDETERMINED_STATUS.to_string(),
            paths: Paths::new(),
            regions: Regions::default(),
            error: None,
        }
    }

    /// URL of the host descriptor this view loads.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Name from the last loaded descriptor, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Status from the last loaded descriptor, `"undetermined"` before that.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    #[must_use]
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Last load failure, cleared by the next successful load.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.name.is_some()
    }

    /// Replace everything shown by the view with `host`.
    pub fn set_content(&mut self, host: HostDescriptor) {
        self.regions = Regions {
            name: host.name.clone(),
            status: host.status.clone(),
            paths: paths_json(&host.paths),
        };
        self.name = Some(host.name);
        self.status = host.status;
        self.paths = host.paths;
        self.error = None;
    }

    /// Apply the result of fetching this view's descriptor.
    ///
    /// A rejected request only reaches the diagnostic log, so the view is left
    /// untouched. A failed one keeps the displayed fields and records the error.
    pub fn apply(&mut self, outcome: HostOutcome) {
        match outcome {
            HostOutcome::Loaded(host) => self.set_content(host),
            HostOutcome::Rejected { .. } => {}
            HostOutcome::Failed(err) => self.error = Some(err.to_string()),
        }
    }
}
