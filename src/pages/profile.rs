//! Profile page: edit personal details, upload a profile image, and change
//! the account password. Available to every role.

use leptos::prelude::*;

use crate::net::types::UserPatch;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::SessionState;

/// Profile management page.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    // Seed the form from the session once the user record is present.
    let seeded = RwSignal::new(false);
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            name.set(user.name);
            phone.set(user.phone.unwrap_or_default());
            seeded.set(true);
        }
    });

    let save_details = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let patch = UserPatch::details(&name.get_untracked(), &phone.get_untracked());
        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            leptos::task::spawn_local(async move {
                let _ = crate::state::actions::update_user(session, notify, patch).await;
                saving.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &notify, patch);
        }
    });

    let on_image_selected = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::util::media::upload_file(&file).await {
                    Ok(url) => {
                        let patch = UserPatch {
                            profile_image: Some(url),
                            ..UserPatch::default()
                        };
                        let _ = crate::state::actions::update_user(session, notify, patch).await;
                    }
                    Err(e) => {
                        crate::state::actions::handle_api_error(session, notify, &e);
                    }
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &session, &notify, &uploading);
        }
    };

    let change_password = Callback::new(move |()| {
        if new_password.get_untracked().is_empty() {
            notify.update(|n| {
                n.push(ToastKind::Error, "New password cannot be empty.");
            });
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::state::actions::update_password(
                    session,
                    notify,
                    &current_password.get_untracked(),
                    &new_password.get_untracked(),
                )
                .await;
                current_password.set(String::new());
                new_password.set(String::new());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    });

    let avatar = move || {
        session
            .get()
            .user
            .and_then(|u| u.profile_image)
            .map(|src| view! { <img class="profile-page__avatar" src=src alt="Profile image"/> })
    };

    view! {
        <div class="profile-page">
            <h1>"Your profile"</h1>

            <section class="profile-page__section">
                {avatar}
                <label class="form__label">
                    {move || if uploading.get() { "Uploading..." } else { "Profile image" }}
                    <input type="file" accept="image/*,.pdf" on:change=on_image_selected/>
                </label>
            </section>

            <section class="profile-page__section">
                <h2>"Details"</h2>
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    save_details.run(());
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
                        "Phone"
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>
            </section>

            <section class="profile-page__section">
                <h2>"Change password"</h2>
                <form on:submit=move |ev| {
                    ev.prevent_default();
                    change_password.run(());
                }>
                    <label class="form__label">
                        "Current password"
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "New password"
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn" type="submit">"Update password"</button>
                </form>
            </section>
        </div>
    }
}
