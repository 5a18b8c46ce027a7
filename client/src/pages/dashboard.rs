//! Dashboard page: tiles fetched from the external API.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The request carries the bearer
//! token from local storage; a `401` signs the viewer out and the enclosing
//! guard sends them to `/auth`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::api::{FetchState, use_fetch};
use crate::net::types::DashboardItem;

/// Status line shown above the tiles, if any.
fn status_message(state: &FetchState<Vec<DashboardItem>>) -> Option<String> {
    if state.loading {
        return Some("Loading dashboard...".to_owned());
    }
    if let Some(err) = &state.error {
        return Some(format!("Could not load dashboard: {err}"));
    }
    match &state.data {
        Some(items) if items.is_empty() => Some("Nothing to show yet.".to_owned()),
        _ => None,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_fetch::<Vec<DashboardItem>>("dashboard");

    view! {
        <section class="page page--dashboard">
            <h1>"Dashboard"</h1>
            <Show when=move || state.with(|s| status_message(s).is_some())>
                <p class="dashboard__status">{move || state.with(status_message).unwrap_or_default()}</p>
            </Show>
            <ul class="dashboard__tiles">
                <For
                    each=move || state.with(|s| s.data.clone().unwrap_or_default())
                    key=|item| item.label.clone()
                    let:item
                >
                    <li class="dashboard__tile">
                        <span class="dashboard__label">{item.label.clone()}</span>
                        <span class="dashboard__value">{item.value.clone()}</span>
                        {item.hint.clone().map(|hint| view! { <span class="dashboard__hint">{hint}</span> })}
                    </li>
                </For>
            </ul>
        </section>
    }
}
