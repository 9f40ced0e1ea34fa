//! Doctor dashboard: approval notice and recent conversations.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Doctor dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let conversations = LocalResource::new(move || async move {
        let result = crate::net::api::fetch_conversations().await;
        crate::state::actions::handle_fetch(session, notify, result)
    });

    let pending_notice = move || {
        session
            .get()
            .user
            .filter(|u| u.is_pending_doctor())
            .map(|_| {
                view! {
                    <div class="dashboard-page__notice">
                        <p>"Your profile is awaiting review. "
                            <a href="/doctor/pending">"See details."</a></p>
                    </div>
                }
            })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
            </header>

            {pending_notice}

            <section class="dashboard-page__section">
                <h2>"Recent conversations"</h2>
                <Suspense fallback=move || view! { <p>"Loading conversations..."</p> }>
                    {move || {
                        conversations.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No conversations yet."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <ul class="dashboard-page__conversations">
                                    {list
                                        .into_iter()
                                        .map(|c| {
                                            let unread = c.unread;
                                            view! {
                                                <li class="dashboard-page__conversation">
                                                    <a href="/chat">
                                                        <span>{c.partner_name.clone()}</span>
                                                        <span class="dashboard-page__preview">
                                                            {c.last_message.clone().unwrap_or_default()}
                                                        </span>
                                                        <Show when={move || unread > 0}>
                                                            <span class="dashboard-page__unread">
                                                                {unread}
                                                            </span>
                                                        </Show>
                                                    </a>
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
