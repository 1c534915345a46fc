//! Page model — the three rendering targets of the dashboard.
//!
//! - `content`: host views, in mount order
//! - `logs`: free text replaced on log load failures
//! - `logcontent`: log items, append-only

use std::ops::Range;

use hostdash_domain::error::DashboardError;
use hostdash_domain::log::LogEntry;
use hostdash_domain::payload::value_text;

use crate::host_view::HostView;
use crate::services::LogsOutcome;

/// One rendered log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogItem {
    pub time: String,
    pub message: String,
}

impl From<LogEntry> for LogItem {
    fn from(entry: LogEntry) -> Self {
        Self {
            message: entry.message(),
            time: entry.time,
        }
    }
}

/// The `logs` text and the `logcontent` list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogPanel {
    text: Option<String>,
    items: Vec<LogItem>,
}

impl LogPanel {
    /// Text of the `logs` element, set when a log load was rejected or failed.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn items(&self) -> &[LogItem] {
        &self.items
    }

    /// Apply the result of a log load.
    ///
    /// Entries are appended after the existing ones. A rejection replaces the
    /// `logs` text with the response body; a failure replaces it with the error.
    pub fn apply(&mut self, outcome: LogsOutcome) {
        match outcome {
            LogsOutcome::Entries(entries) => {
                self.items.extend(entries.into_iter().map(LogItem::from));
            }
            LogsOutcome::Rejected { body, .. } => self.text = Some(value_text(&body)),
            LogsOutcome::Failed(err) => self.text = Some(err.to_string()),
        }
    }
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    content: Vec<HostView>,
    hosts_error: Option<String>,
    logs: LogPanel,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hosts(&self) -> &[HostView] {
        &self.content
    }

    #[must_use]
    pub fn host(&self, index: usize) -> Option<&HostView> {
        self.content.get(index)
    }

    pub fn host_mut(&mut self, index: usize) -> Option<&mut HostView> {
        self.content.get_mut(index)
    }

    /// Append an unloaded view bound to `url`; returns its index.
    pub fn mount_host(&mut self, url: impl Into<String>) -> usize {
        self.content.push(HostView::new(url));
        self.content.len() - 1
    }

    /// Append one view per href, in order; returns the range of new indices.
    pub fn mount_hosts<I>(&mut self, hrefs: I) -> Range<usize>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let start = self.content.len();
        self.content.extend(hrefs.into_iter().map(HostView::new));
        start..self.content.len()
    }

    /// Error of the last host list load, if it failed.
    #[must_use]
    pub fn hosts_error(&self) -> Option<&str> {
        self.hosts_error.as_deref()
    }

    pub fn set_hosts_error(&mut self, err: &DashboardError) {
        self.hosts_error = Some(err.to_string());
    }

    #[must_use]
    pub fn logs(&self) -> &LogPanel {
        &self.logs
    }

    pub fn logs_mut(&mut self) -> &mut LogPanel {
        &mut self.logs
    }
}
