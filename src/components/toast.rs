//! Toast host rendering transient notifications.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastKind};

/// Fixed-position stack of active toasts with per-toast dismissal.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-host">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Info => "toast toast--info",
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| notify.update(|n| n.dismiss(&id))
                                >
                                    "\u{00d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
