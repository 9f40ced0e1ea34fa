//! Registration page for patients and doctors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, Role};
use crate::state::guard::post_register_route;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::SessionState;

/// Registration page. Validation failures from the server arrive as one
/// aggregated message; the only client-side check is password confirmation.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let as_doctor = RwSignal::new(false);
    let pending = RwSignal::new(false);

    Effect::new(move || {
        if let Some(user) = session.get().user {
            navigate(post_register_route(&user), NavigateOptions::default());
        }
    });

    let submit = Callback::new(move |()| {
        if pending.get_untracked() {
            return;
        }
        if password.get_untracked() != confirm.get_untracked() {
            notify.update(|n| {
                n.push(ToastKind::Error, "Passwords do not match.");
            });
            return;
        }

        let payload = RegisterRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            role: if as_doctor.get_untracked() { Role::Doctor } else { Role::Patient },
            phone: Some(phone.get_untracked()).filter(|p| !p.trim().is_empty()),
            accepted_terms: true,
        };

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            leptos::task::spawn_local(async move {
                let _ = crate::state::actions::register(session, notify, payload).await;
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, payload);
        }
    });

    view! {
        <div class="register-page">
            <h1>"Create your account"</h1>

            <form class="register-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
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
                    "Phone (optional)"
                    <input
                        class="form__input"
                        type="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
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
                <label class="form__label">
                    "Confirm password"
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || as_doctor.get()
                        on:change=move |ev| as_doctor.set(event_target_checked(&ev))
                    />
                    "I am registering as a doctor"
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating..." } else { "Create account" }}
                </button>
            </form>

            <p class="register-page__terms">
                "By signing up you accept the "
                <a href="/terms">"terms of service"</a>
                " and "
                <a href="/privacy">"privacy policy"</a>
                "."
            </p>
        </div>
    }
}
