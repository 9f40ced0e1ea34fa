//! Top navigation bar with role-dependent links and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Navigation links for a role. Exhaustive so a new role is a
/// compile-time-checked change.
fn links_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Patient => &[
            ("/", "Home"),
            ("/doctors", "Doctors"),
            ("/detect", "Detection"),
            ("/chat", "Messages"),
            ("/profile", "Profile"),
        ],
        Role::Doctor => &[
            ("/dashboard", "Dashboard"),
            ("/chat", "Messages"),
            ("/profile", "Profile"),
        ],
        Role::Admin => &[("/admin", "Admin"), ("/profile", "Profile")],
    }
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::state::actions::logout(session, notify);
            navigate("/login", NavigateOptions::default());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &notify, &navigate, NavigateOptions::default());
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"MediLink"</a>
            <div class="navbar__links">
                {move || match session.get().role() {
                    Some(role) => links_for(role)
                        .iter()
                        .map(|(href, label)| {
                            view! { <a href=*href class="navbar__link">{*label}</a> }
                        })
                        .collect::<Vec<_>>()
                        .into_any(),
                    None => view! {
                        <a href="/login" class="navbar__link">"Sign in"</a>
                        <a href="/register" class="navbar__link">"Register"</a>
                    }
                    .into_any(),
                }}
            </div>
            <Show when=move || session.get().is_authenticated()>
                <button class="navbar__logout" on:click=on_logout.clone()>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}
