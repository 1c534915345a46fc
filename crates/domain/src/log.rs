//! Log entries served by `GET /api/logs`.

use serde::{Deserialize, Serialize};

/// Marker substituted for the first line break of a log message.
pub const LINE_BREAK_MARKER: &str = "<br/>";

/// A single server log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: String,
    pub content: String,
}

impl LogEntry {
    /// Message text as displayed: only the first `\n` becomes
    /// [`LINE_BREAK_MARKER`], later ones are kept.
    #[must_use]
    pub fn message(&self) -> String {
        self.content.replacen('\n', LINE_BREAK_MARKER, 1)
    }
}
