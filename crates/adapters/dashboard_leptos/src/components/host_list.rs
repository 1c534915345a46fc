//! Host list component — the `#content` container.

use hostdash_app::services::DashboardService;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::HostView;
use crate::api::GlooClient;

/// Fetches the alive-host collection once and mounts one [`HostView`] per
/// entry, in response order.
#[component]
pub fn HostList(
    /// URL of the host collection.
    url: String,
) -> impl IntoView {
    let hrefs = RwSignal::new(Vec::<String>::new());
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match DashboardService::new(GlooClient).fetch_host_links(&url).await {
            Ok(links) => {
                if let Some((status, body)) = &links.rejected {
                    leptos::logging::warn!("{url}: HTTP {status}: {body}");
                }
                hrefs.try_update(|list| list.extend(links.hrefs));
            }
            Err(err) => {
                leptos::logging::error!("{err}");
                error.set(Some(err.to_string()));
            }
        }
    });

    view! {
        <div id="content">
            {move || error.get().map(|err| view! { <p class="error">{err}</p> })}
            <For
                each=move || hrefs.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=|(_, href)| view! { <HostView url=href/> }
            />
        </div>
    }
}
