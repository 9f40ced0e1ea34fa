//! Admin dashboard: platform counters and doctor approval queue.

use leptos::prelude::*;

use crate::net::types::{ApprovalStatus, Role, User};
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Admin dashboard page.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let stats = LocalResource::new(move || async move {
        let result = crate::net::api::fetch_admin_stats().await;
        crate::state::actions::handle_fetch(session, notify, result)
    });
    let users = LocalResource::new(move || async move {
        let result = crate::net::api::fetch_admin_users().await;
        crate::state::actions::handle_fetch(session, notify, result)
    });

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>

            <section class="admin-page__stats">
                <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                    {move || {
                        stats.get().map(|result| match result {
                            Ok(s) => view! {
                                <dl class="admin-page__counters">
                                    <dt>"Patients"</dt>
                                    <dd>{s.patients}</dd>
                                    <dt>"Doctors"</dt>
                                    <dd>{s.doctors}</dd>
                                    <dt>"Awaiting approval"</dt>
                                    <dd>{s.pending_doctors}</dd>
                                    <dt>"Messages"</dt>
                                    <dd>{s.messages}</dd>
                                </dl>
                            }
                            .into_any(),
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                    }}
                </Suspense>
            </section>

            <section class="admin-page__users">
                <h2>"Users"</h2>
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        users.get().map(|result| match result {
                            Ok(list) => view! {
                                <ul class="admin-page__list">
                                    {list
                                        .into_iter()
                                        .map(|u| view! { <AdminUserRow user=u users=users/> })
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

/// One user row; doctors awaiting review get approve/reject controls.
#[component]
fn AdminUserRow(
    user: User,
    users: LocalResource<Result<Vec<User>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let reviewable = user.is_pending_doctor();
    let user_id = user.id.clone();

    let decide = move |status: ApprovalStatus| {
        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.clone();
            let users = users.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::set_doctor_approval(&user_id, status).await {
                    Ok(_) => users.refetch(),
                    Err(e) => crate::state::actions::handle_api_error(session, notify, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&user_id, &users, &session, &notify, status);
        }
    };
    let approve = decide.clone();
    let reject = decide;

    let role_label = match user.role {
        Role::Patient => "patient",
        Role::Doctor => "doctor",
        Role::Admin => "admin",
    };

    view! {
        <li class="admin-page__user">
            <span class="admin-page__name">{user.name.clone()}</span>
            <span class="admin-page__email">{user.email.clone()}</span>
            <span class="admin-page__role">{role_label}</span>
            <Show when=move || reviewable>
                <button
                    class="btn btn--primary"
                    on:click={
                        let approve = approve.clone();
                        move |_| approve(ApprovalStatus::Approved)
                    }
                >
                    "Approve"
                </button>
                <button
                    class="btn"
                    on:click={
                        let reject = reject.clone();
                        move |_| reject(ApprovalStatus::Rejected)
                    }
                >
                    "Reject"
                </button>
            </Show>
        </li>
    }
}
