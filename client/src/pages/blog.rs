use leptos::prelude::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <section class="page page--blog">
            <h1>"Blog"</h1>
            <p>"Notes on building and shipping."</p>
        </section>
    }
}
