//! Profile page with the logout action. Mounted behind `RouteGuard`.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let has_token = {
        let auth = auth.clone();
        move || auth.status().is_authenticated()
    };

    // The enclosing guard sees the status flip and redirects to `/auth`.
    let on_logout = move |_| auth.sign_out();

    view! {
        <section class="page page--profile">
            <h1>"Profile"</h1>
            <p class="profile__session">
                {move || if has_token() { "Signed in." } else { "Signed out." }}
            </p>
            <button class="profile__logout" on:click=on_logout>"Log out"</button>
        </section>
    }
}
