//! Patient home: greeting, medical summary, and followed doctors.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Patient landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let followed = LocalResource::new(move || async move {
        let result = crate::net::api::fetch_followed_doctors().await;
        crate::state::actions::handle_fetch(session, notify, result)
    });

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |u| format!("Welcome back, {}", u.name))
    };

    let summary = move || {
        session
            .get()
            .user
            .and_then(|u| u.patient_profile)
            .map(|p| {
                view! {
                    <dl class="home-page__summary">
                        <dt>"Blood group"</dt>
                        <dd>{p.blood_group.unwrap_or_else(|| "—".to_owned())}</dd>
                        <dt>"Allergies"</dt>
                        <dd>{if p.allergies.is_empty() { "None recorded".to_owned() } else { p.allergies.join(", ") }}</dd>
                        <dt>"Chronic conditions"</dt>
                        <dd>{if p.chronic_conditions.is_empty() { "None recorded".to_owned() } else { p.chronic_conditions.join(", ") }}</dd>
                    </dl>
                }
                .into_any()
            })
            .unwrap_or_else(|| {
                view! { <p class="home-page__summary">"No medical summary on file yet."</p> }
                    .into_any()
            })
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>

            <section class="home-page__section">
                <h2>"Medical summary"</h2>
                {summary}
            </section>

            <section class="home-page__section">
                <h2>"Your doctors"</h2>
                <Suspense fallback=move || view! { <p>"Loading doctors..."</p> }>
                    {move || {
                        followed.get().map(|result| match result {
                            Ok(list) if list.is_empty() => view! {
                                <p>"You are not following any doctors yet. "
                                    <a href="/doctors">"Find one."</a></p>
                            }
                            .into_any(),
                            Ok(list) => view! {
                                <ul class="home-page__doctors">
                                    {list
                                        .into_iter()
                                        .map(|d| {
                                            view! {
                                                <li class="home-page__doctor">
                                                    <span>{d.name.clone()}</span>
                                                    <span class="home-page__speciality">
                                                        {d.speciality.clone().unwrap_or_default()}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any(),
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
