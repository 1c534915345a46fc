//! Log list component — the `#logs` text and the `#logcontent` list.

use hostdash_app::page::LogPanel;
use hostdash_app::services::{DashboardService, LogsOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooClient;

/// Fetches the log collection once and appends one item per entry.
#[component]
pub fn LogList(
    /// URL of the log collection.
    url: String,
) -> impl IntoView {
    let panel = RwSignal::new(LogPanel::default());

    spawn_local(async move {
        let outcome = DashboardService::new(GlooClient).fetch_logs(&url).await;
        if let LogsOutcome::Failed(err) = &outcome {
            leptos::logging::error!("{err}");
        }
        panel.try_update(|logs| logs.apply(outcome));
    });

    view! {
        <section class="logs">
            <div id="logs" class="error">{move || panel.with(|logs| logs.text().map(str::to_string))}</div>
            <ul id="logcontent">
                {move || {
                    panel
                        .with(|logs| logs.items().to_vec())
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <span class="log-time">{item.time}</span>
                                    <div class="log-message">{item.message}</div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
