use leptos::prelude::*;

pub mod api;
mod components;
pub mod config;

use components::{HostList, LogList};
use config::DashboardConfig;

/// Root application component.
///
/// Renders the three page targets: `#content` (host views), `#logs` and
/// `#logcontent`.
#[component]
pub fn App() -> impl IntoView {
    let endpoints = DashboardConfig::from_document().endpoints;

    view! {
        <main>
            <HostList url=endpoints.hosts/>
            <LogList url=endpoints.logs/>
        </main>
    }
}
