//! HATEOAS-style links carried by collection entries.

use serde::{Deserialize, Serialize};

/// A single link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// The `_links` object of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// One entry of `GET /api/host/alive`.
///
/// Only the `self` link is read; any other field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostListEntry {
    #[serde(rename = "_links")]
    pub links: Links,
}

impl HostListEntry {
    /// URL of the host's detail resource.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.links.self_link.href
    }
}
