//! Login page with email/password form and rehydration-retry surface.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::guard::post_login_route;
use crate::state::notify::NotifyState;
use crate::state::session::{Phase, SessionState};

/// Login page.
///
/// Submitting runs the pure login transition via `state::actions`; the
/// redirect is a separate effect derived from the resulting state, so a
/// signed-in visitor is routed away the same way a fresh login is.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    // Navigation decision derived from state, not performed by the login
    // call itself.
    Effect::new(move || {
        if let Some(user) = session.get().user {
            navigate(post_login_route(&user), NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |()| {
        if pending.get_untracked() || email.get_untracked().trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            leptos::task::spawn_local(async move {
                let _ = crate::state::actions::login(
                    session,
                    notify,
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                )
                .await;
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &notify);
        }
    });

    let retry = move |_| {
        session.update(SessionState::clear_error);
        #[cfg(feature = "hydrate")]
        {
            crate::state::actions::init_session(session, notify);
        }
    };

    view! {
        <div class="login-page">
            <h1>"MediLink"</h1>
            <p>"Care, connected."</p>

            <Show when=move || session.get().phase() == Phase::Error>
                <div class="login-page__retry">
                    <p>{move || session.get().error.unwrap_or_default()}</p>
                    <button class="btn" on:click=retry>"Retry"</button>
                </div>
            </Show>

            <form class="login-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="form__label">
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="login-page__alt">
                "New here? " <a href="/register">"Create an account"</a>
            </p>
        </div>
    }
}
