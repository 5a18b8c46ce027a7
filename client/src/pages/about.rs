use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1>"About"</h1>
            <p>"A small studio building web products end to end."</p>
        </section>
    }
}
