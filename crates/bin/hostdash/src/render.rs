//! Plain-text rendering of the dashboard page.
//!
//! Mirrors the three targets of the browser page: `content`, `logs` and
//! `logcontent`, in that order.

use std::fmt;

use hostdash_app::host_view::HostView;
use hostdash_app::page::Dashboard;

/// [`Display`](fmt::Display) adapter printing a [`Dashboard`] as text.
pub struct PageText<'a>(pub &'a Dashboard);

impl fmt::Display for PageText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;

        writeln!(f, "content")?;
        if let Some(err) = page.hosts_error() {
            writeln!(f, "  ! {err}")?;
        }
        for (index, view) in page.hosts().iter().enumerate() {
            write_host(f, index + 1, view)?;
        }

        writeln!(f, "logs")?;
        if let Some(text) = page.logs().text() {
            writeln!(f, "  {text}")?;
        }

        writeln!(f, "logcontent")?;
        for item in page.logs().items() {
            writeln!(f, "  [{}] {}", item.time, item.message)?;
        }
        Ok(())
    }
}

fn write_host(f: &mut fmt::Formatter<'_>, number: usize, view: &HostView) -> fmt::Result {
    let regions = view.regions();
    writeln!(f, "  [{number}] {}", view.url())?;
    writeln!(f, "      name:   {}", regions.name)?;
    writeln!(f, "      status: {}", view.status())?;
    writeln!(f, "      paths:  {}", regions.paths)?;
    if let Some(err) = view.error() {
        writeln!(f, "      error:  {err}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostdash_app::services::{HostOutcome, LogsOutcome};
    use hostdash_domain::error::TransportError;
    use hostdash_domain::log::LogEntry;

    #[test]
    fn should_render_empty_page_sections() {
        let page = Dashboard::new();
        assert_eq!(PageText(&page).to_string(), "content\nlogs\nlogcontent\n");
    }

    #[test]
    fn should_render_loaded_and_failed_hosts() {
        let mut page = Dashboard::new();
        let first = page.mount_host("/h1");
        let second = page.mount_host("/h2");
        page.host_mut(first).unwrap().apply(HostOutcome::Loaded(
            serde_json::from_str(r#"{"name":"a","status":"up","paths":{"/":"/root"}}"#).unwrap(),
        ));
        page.host_mut(second).unwrap().apply(HostOutcome::Failed(
            TransportError::new("/h2", "timed out").into(),
        ));

        let text = PageText(&page).to_string();
        assert!(text.contains("  [1] /h1\n      name:   a\n      status: up\n      paths:  {\"/\":\"/root\"}\n"));
        assert!(text.contains("  [2] /h2\n      name:   \n      status: undetermined\n"));
        assert!(text.contains("      error:  request to /h2 failed: timed out\n"));
    }

    #[test]
    fn should_render_log_text_and_items() {
        let mut page = Dashboard::new();
        page.logs_mut().apply(LogsOutcome::Entries(vec![LogEntry {
            time: "t1".to_string(),
            content: "m1".to_string(),
        }]));
        page.logs_mut().apply(LogsOutcome::Rejected {
            status: 500,
            body: serde_json::json!("log store down"),
        });

        let text = PageText(&page).to_string();
        assert!(text.ends_with("logs\n  log store down\nlogcontent\n  [t1] m1\n"));
    }
}
