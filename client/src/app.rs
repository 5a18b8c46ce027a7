//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    about::AboutPage, blog::BlogPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, projects::ProjectsPage, services::ServicesPage,
};
use crate::state::auth::provide_auth;
use crate::util::auth::RouteGuard;
use crate::util::storage::browser_tokens;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Protected routes mirror the edge filter's prefixes. `/auth` gets a
/// guest-only guard and is never nested under a guard that redirects to it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth(browser_tokens());

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Folio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route
                    path=StaticSegment("auth")
                    view=|| view! { <RouteGuard require_auth=false><LoginPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGuard><DashboardPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RouteGuard><ProfilePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("projects")
                    view=|| view! { <RouteGuard><ProjectsPage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("services")
                    view=|| view! { <RouteGuard><ServicesPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
