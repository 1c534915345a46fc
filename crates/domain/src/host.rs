//! Host descriptor — the detail resource behind each host's `self` link.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported by a host view that has not loaded yet.
pub const UNDETERMINED_STATUS: &str = "undetermined";

/// Served locations of a host, keyed by location.
///
/// Values are usually plain strings (`"/" -> "/root"`); file hosts report an
/// object of configuration tags per location instead.
pub type Paths = BTreeMap<String, Value>;

/// One managed host as returned by `GET <host href>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostDescriptor {
    pub name: String,
    pub status: String,
    /// Reverse-proxy hosts do not serve any path, so the field may be absent.
    #[serde(default)]
    pub paths: Paths,
}

impl HostDescriptor {
    /// Compact JSON rendering of [`paths`](Self::paths), e.g. `{"/":"/root"}`.
    #[must_use]
    pub fn paths_json(&self) -> String {
        paths_json(&self.paths)
    }
}

/// Compact JSON rendering of a path mapping.
#[must_use]
pub fn paths_json(paths: &Paths) -> String {
    serde_json::to_string(paths).unwrap_or_default()
}
