//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1>"Folio"</h1>
            <p>"Design, engineering, and the occasional write-up."</p>
            <nav class="page__links">
                <a href="/about">"About"</a>
                <a href="/blog">"Blog"</a>
                <a href="/projects">"Projects"</a>
                <a href="/services">"Services"</a>
            </nav>
        </section>
    }
}
