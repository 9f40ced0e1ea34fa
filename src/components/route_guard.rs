//! Role-gated wrapper around routed page content.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::guard::{GuardOutcome, evaluate};
use crate::state::session::SessionState;

/// Gate `children` behind a required-role set.
///
/// Renders a placeholder while the session is loading, redirects to the
/// login screen when anonymous, and redirects a signed-in user with a
/// disallowed role to that role's landing screen. Guarded content is only
/// ever rendered on [`GuardOutcome::Allow`].
#[component]
pub fn RouteGuard(allow: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirects run as a side effect of state changes; the render branch
    // below never shows guarded content for a redirecting outcome.
    Effect::new(move || match evaluate(&session.get(), allow) {
        GuardOutcome::RedirectLogin => navigate("/login", NavigateOptions::default()),
        GuardOutcome::Redirect(path) => navigate(path, NavigateOptions::default()),
        GuardOutcome::Loading | GuardOutcome::Allow => {}
    });

    view! {
        {move || match evaluate(&session.get(), allow) {
            GuardOutcome::Allow => children(),
            GuardOutcome::Loading => {
                view! { <p class="route-guard__placeholder">"Loading..."</p> }.into_any()
            }
            GuardOutcome::RedirectLogin | GuardOutcome::Redirect(_) => {
                view! { <p class="route-guard__placeholder">"Redirecting..."</p> }.into_any()
            }
        }}
    }
}
