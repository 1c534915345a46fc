//! Dashboard service — loads host descriptors, the host list and the logs.

use std::ops::Range;

use futures::future::{join, join_all};
use serde_json::Value;

use hostdash_domain::error::DashboardError;
use hostdash_domain::host::HostDescriptor;
use hostdash_domain::link::HostListEntry;
use hostdash_domain::log::LogEntry;
use hostdash_domain::payload::{decode, decode_value};
use hostdash_domain::status::SuccessCheck;

use crate::page::Dashboard;
use crate::ports::{HttpClient, HttpResponse};

/// Result of fetching one host descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum HostOutcome {
    /// 2xx response carrying a valid descriptor.
    Loaded(HostDescriptor),
    /// Non-success response; the parsed body went to the diagnostic log.
    Rejected { status: u16, body: Value },
    Failed(DashboardError),
}

/// Result of fetching the log collection.
#[derive(Debug, Clone, PartialEq)]
pub enum LogsOutcome {
    Entries(Vec<LogEntry>),
    /// Non-success response with its parsed body.
    Rejected { status: u16, body: Value },
    Failed(DashboardError),
}

/// Hrefs read from the host collection.
#[derive(Debug, Clone, PartialEq)]
pub struct HostLinks {
    /// Each entry's `self` href, in response order.
    pub hrefs: Vec<String>,
    /// Status and parsed body of a non-20x response that still decoded as a
    /// host list. Callers forward it to their diagnostic sink.
    pub rejected: Option<(u16, Value)>,
}

/// Collection endpoints read at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub hosts: String,
    pub logs: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            hosts: "/api/host/alive".to_string(),
            logs: "/api/logs".to_string(),
        }
    }
}

/// Application service running the dashboard loaders over an [`HttpClient`].
pub struct DashboardService<C> {
    client: C,
}

impl<C: HttpClient> DashboardService<C> {
    /// Create a new service issuing requests through `client`.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    async fn request(&self, url: &str) -> Result<HttpResponse, DashboardError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).await.inspect_err(|err| {
            tracing::warn!(error = %err, "request failed");
        })?;
        tracing::debug!(url, status = response.status, "response received");
        Ok(response)
    }

    /// Fetch the descriptor behind one host view.
    ///
    /// Any 2xx status is a success. Other statuses are parsed as JSON and
    /// reported to the diagnostic log only.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_host(&self, url: &str) -> HostOutcome {
        let response = match self.request(url).await {
            Ok(response) => response,
            Err(err) => return HostOutcome::Failed(err),
        };

        let outcome = if SuccessCheck::Class2xx.accepts(response.status) {
            decode::<HostDescriptor>(url, &response.body).map(HostOutcome::Loaded)
        } else {
            decode_value(url, &response.body).map(|body| {
                tracing::warn!(status = response.status, %body, "host request rejected");
                HostOutcome::Rejected {
                    status: response.status,
                    body,
                }
            })
        };

        outcome.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "host payload rejected");
            HostOutcome::Failed(err.into())
        })
    }

    /// Fetch the host collection and return each entry's `self` href, in
    /// response order.
    ///
    /// A status outside 200–209 is reported to the diagnostic log and handed
    /// back in [`HostLinks::rejected`]; the body is then still read as a
    /// host list.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Transport`] when no response arrives, or
    /// [`DashboardError::Decode`] when the body is not a host list.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_host_links(&self, url: &str) -> Result<HostLinks, DashboardError> {
        let response = self.request(url).await?;

        let mut rejected = None;
        if !SuccessCheck::Narrow20x.accepts(response.status) {
            match decode_value(url, &response.body) {
                Ok(body) => {
                    tracing::warn!(status = response.status, %body, "host list rejected");
                    rejected = Some((response.status, body));
                }
                Err(err) => {
                    tracing::warn!(status = response.status, error = %err, "host list rejected");
                }
            }
        }

        let entries: Vec<HostListEntry> = decode(url, &response.body).inspect_err(|err| {
            tracing::warn!(error = %err, "host list payload rejected");
        })?;
        Ok(HostLinks {
            hrefs: entries
                .iter()
                .map(|entry| entry.href().to_string())
                .collect(),
            rejected,
        })
    }

    /// Fetch the log collection.
    ///
    /// Only 200–209 counts as success; other statuses hand back the parsed
    /// body for display.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_logs(&self, url: &str) -> LogsOutcome {
        let response = match self.request(url).await {
            Ok(response) => response,
            Err(err) => return LogsOutcome::Failed(err),
        };

        let outcome = if SuccessCheck::Narrow20x.accepts(response.status) {
            decode::<Vec<LogEntry>>(url, &response.body).map(LogsOutcome::Entries)
        } else {
            decode_value(url, &response.body).map(|body| {
                tracing::warn!(status = response.status, %body, "log request rejected");
                LogsOutcome::Rejected {
                    status: response.status,
                    body,
                }
            })
        };

        outcome.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "log payload rejected");
            LogsOutcome::Failed(err.into())
        })
    }

    /// Load the host list into `page`, then load every new view concurrently.
    pub async fn load_hosts(&self, url: &str, page: &mut Dashboard) {
        let links = self.fetch_host_links(url).await;
        self.mount_and_load(links, page).await;
    }

    /// Load the log collection into `page`.
    pub async fn load_logs(&self, url: &str, page: &mut Dashboard) {
        let outcome = self.fetch_logs(url).await;
        page.logs_mut().apply(outcome);
    }

    /// Run both loaders, fetching the two collections concurrently.
    pub async fn load(&self, endpoints: &Endpoints, page: &mut Dashboard) {
        let (links, logs) = join(
            self.fetch_host_links(&endpoints.hosts),
            self.fetch_logs(&endpoints.logs),
        )
        .await;
        page.logs_mut().apply(logs);
        self.mount_and_load(links, page).await;
    }

    async fn mount_and_load(
        &self,
        links: Result<HostLinks, DashboardError>,
        page: &mut Dashboard,
    ) {
        match links {
            Ok(links) => {
                let mounted = page.mount_hosts(links.hrefs);
                self.load_views(mounted, page).await;
            }
            Err(err) => page.set_hosts_error(&err),
        }
    }

    async fn load_views(&self, range: Range<usize>, page: &mut Dashboard) {
        let urls: Vec<String> = page.hosts()[range.clone()]
            .iter()
            .map(|view| view.url().to_string())
            .collect();
        let outcomes = join_all(urls.iter().map(|url| self.fetch_host(url))).await;
        for (index, outcome) in range.zip(outcomes) {
            if let Some(view) = page.host_mut(index) {
                view.apply(outcome);
            }
        }
    }
}
