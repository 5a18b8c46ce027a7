//! Client project area. Mounted behind `RouteGuard`.

use leptos::prelude::*;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <section class="page page--projects">
            <h1>"Projects"</h1>
            <p>"Active engagements and their deliverables."</p>
        </section>
    }
}
