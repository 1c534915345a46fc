//! Host view component — one managed host with its own display state.

use hostdash_app::host_view::HostView as HostViewState;
use hostdash_app::services::{DashboardService, HostOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooClient;

/// Fetches the descriptor at `url` once and shows its name, status and paths.
///
/// Each instance owns its state signal, so views never interfere.
#[component]
pub fn HostView(
    /// URL of the host descriptor (the entry's `self` link).
    url: String,
) -> impl IntoView {
    let state = RwSignal::new(HostViewState::new(url.clone()));

    spawn_local(async move {
        let outcome = DashboardService::new(GlooClient).fetch_host(&url).await;
        match &outcome {
            HostOutcome::Loaded(_) => {}
            HostOutcome::Rejected { status, body } => {
                leptos::logging::warn!("{url}: HTTP {status}: {body}");
            }
            HostOutcome::Failed(err) => leptos::logging::error!("{err}"),
        }
        state.try_update(|host| host.apply(outcome));
    });

    view! {
        <div class="host-view" data-status=move || state.with(|host| host.status().to_string())>
            <div class="host-name">{move || state.with(|host| host.regions().name.clone())}</div>
            <div class="host-status">{move || state.with(|host| host.regions().status.clone())}</div>
            <div class="host-paths">{move || state.with(|host| host.regions().paths.clone())}</div>
            {move || {
                state
                    .with(|host| host.error().map(str::to_string))
                    .map(|err| view! { <div class="host-error error">{err}</div> })
            }}
        </div>
    }
}
