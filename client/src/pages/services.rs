//! Service catalogue for signed-in clients. Mounted behind `RouteGuard`.

use leptos::prelude::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <section class="page page--services">
            <h1>"Services"</h1>
            <p>"Retainers, audits, and build sprints."</p>
        </section>
    }
}
