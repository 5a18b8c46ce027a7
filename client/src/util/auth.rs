//! Route guard component and its redirect wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The edge
//! filter has already run by the time a page mounts, but it only saw the
//! cookie at navigation time; the guard reacts to later changes such as a
//! logout in another component.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::{GuardOutcome, LOGIN_PATH, RedirectLatch};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::use_auth;

/// Navigation options for guard redirects.
///
/// Replacing the history entry keeps the back button from returning to a
/// page that would redirect again.
pub fn guard_navigate_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `outcome` enters a redirect, at most once per transition.
pub fn install_guard_redirect<P, F>(outcome: Memo<GuardOutcome>, current_path: P, navigate: F)
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(guard_redirect_runner(outcome, current_path, navigate));
}

/// Body of the guard effect. Each call reads `outcome` and navigates when the
/// latch lets a redirect through.
fn guard_redirect_runner<P, F>(outcome: Memo<GuardOutcome>, current_path: P, navigate: F) -> impl FnMut() + 'static
where
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut latch = RedirectLatch::new();
    move || {
        let outcome = outcome.get();
        let path = current_path();
        if let Some(target) = latch.issue(&outcome, &path) {
            navigate(&target, guard_navigate_options());
        }
    }
}

/// Wraps a subtree that is only for signed-in (or only for signed-out) viewers.
///
/// - `require_auth` (default `true`): who may see the children.
/// - `redirect_to` (default `/auth`): where unauthenticated viewers go.
///   Signed-in viewers on a guest-only subtree always go to `/dashboard`.
/// - `fallback`: shown while auth is still resolving.
///
/// Never nest a guest-only guard under a guard whose `redirect_to` points
/// back at the same route.
#[component]
pub fn RouteGuard(
    #[prop(default = true)] require_auth: bool,
    #[prop(into, default = LOGIN_PATH.to_owned())] redirect_to: String,
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();

    let outcome = Memo::new(move |_| GuardOutcome::decide(require_auth, auth.status(), &redirect_to));
    install_guard_redirect(outcome, move || location.pathname.get(), navigate);

    move || match outcome.get() {
        GuardOutcome::Pending => fallback
            .as_ref()
            .map_or_else(|| view! { <GuardSpinner/> }.into_any(), ViewFn::run),
        GuardOutcome::Redirect(_) => ().into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}

/// Default view while auth resolves.
#[component]
pub fn GuardSpinner() -> impl IntoView {
    view! {
        <div class="guard-spinner" role="status" aria-live="polite">
            <span class="guard-spinner__ring"></span>
            <span class="guard-spinner__label">"Checking session..."</span>
        </div>
    }
}
