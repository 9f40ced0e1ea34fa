//! Messaging: conversation list, message history, and send box.

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Chat page, available to every role.
#[component]
pub fn ChatPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let selected = RwSignal::new(Option::<String>::None);
    let draft = RwSignal::new(String::new());

    let conversations = LocalResource::new(move || async move {
        let result = crate::net::api::fetch_conversations().await;
        crate::state::actions::handle_fetch(session, notify, result)
    });
    let messages = LocalResource::new(move || {
        let conversation = selected.get();
        async move {
            match conversation {
                Some(id) => {
                    let result = crate::net::api::fetch_messages(&id).await;
                    crate::state::actions::handle_fetch(session, notify, result)
                }
                None => Ok(Vec::new()),
            }
        }
    });

    let send = Callback::new(move |()| {
        let Some(conversation_id) = selected.get_untracked() else {
            return;
        };
        let content = draft.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let messages = messages.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::send_message(&conversation_id, content.trim()).await {
                    Ok(_) => {
                        draft.set(String::new());
                        messages.refetch();
                    }
                    Err(e) => crate::state::actions::handle_api_error(session, notify, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&conversation_id, &content, &messages, &session, &notify);
        }
    });

    let own_id = move || session.get().user.map(|u| u.id).unwrap_or_default();

    view! {
        <div class="chat-page">
            <aside class="chat-page__sidebar">
                <h2>"Conversations"</h2>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        conversations.get().map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No conversations yet."</p> }.into_any()
                            }
                            Ok(list) => view! {
                                <ul class="chat-page__conversations">
                                    {list
                                        .into_iter()
                                        .map(|c| {
                                            let id = c.id.clone();
                                            let active = {
                                                let id = id.clone();
                                                move || selected.get().as_deref() == Some(id.as_str())
                                            };
                                            view! {
                                                <li>
                                                    <button
                                                        class=move || if active() {
                                                            "chat-page__conversation chat-page__conversation--active"
                                                        } else {
                                                            "chat-page__conversation"
                                                        }
                                                        on:click=move |_| selected.set(Some(id.clone()))
                                                    >
                                                        {c.partner_name.clone()}
                                                    </button>
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
            </aside>

            <section class="chat-page__thread">
                <Suspense fallback=move || view! { <p>"Loading messages..."</p> }>
                    {move || {
                        messages.get().map(|result| match result {
                            Ok(list) => view! {
                                <ul class="chat-page__messages">
                                    {list
                                        .into_iter()
                                        .map(|m: ChatMessage| {
                                            let mine = m.sender_id == own_id();
                                            view! {
                                                <li class=if mine {
                                                    "chat-page__message chat-page__message--own"
                                                } else {
                                                    "chat-page__message"
                                                }>
                                                    {m.content.clone()}
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

                <form class="chat-page__composer" on:submit=move |ev| {
                    ev.prevent_default();
                    send.run(());
                }>
                    <input
                        class="chat-page__input"
                        type="text"
                        placeholder="Write a message"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Send"</button>
                </form>
            </section>
        </div>
    }
}
