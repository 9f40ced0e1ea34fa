//! Doctor discovery: search, follow, and unfollow.

use leptos::prelude::*;

use crate::net::types::DoctorSummary;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Doctor discovery page for patients.
#[component]
pub fn DoctorsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let query = RwSignal::new(String::new());

    // Refetches whenever the query changes.
    let doctors = LocalResource::new(move || {
        let q = query.get();
        async move {
            let result = crate::net::api::fetch_doctors(q.trim()).await;
            crate::state::actions::handle_fetch(session, notify, result)
        }
    });

    view! {
        <div class="doctors-page">
            <h1>"Find a doctor"</h1>

            <input
                class="doctors-page__search"
                type="search"
                placeholder="Search by name or speciality"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <Suspense fallback=move || view! { <p>"Loading doctors..."</p> }>
                {move || {
                    doctors.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p>"No doctors match your search."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <ul class="doctors-page__list">
                                {list
                                    .into_iter()
                                    .map(|d| view! { <DoctorCard doctor=d doctors=doctors/> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any(),
                        Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

/// One doctor in the discovery list with a follow/unfollow toggle.
#[component]
fn DoctorCard(
    doctor: DoctorSummary,
    doctors: LocalResource<Result<Vec<DoctorSummary>, crate::net::error::ApiError>>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let doctor_id = doctor.id.clone();
    let following = doctor.is_following;

    let toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let doctor_id = doctor_id.clone();
            let doctors = doctors.clone();
            leptos::task::spawn_local(async move {
                let result = if following {
                    crate::net::api::unfollow_doctor(&doctor_id).await
                } else {
                    crate::net::api::follow_doctor(&doctor_id).await
                };
                match result {
                    Ok(()) => doctors.refetch(),
                    Err(e) => crate::state::actions::handle_api_error(session, notify, &e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&doctor_id, &doctors, &session, &notify);
        }
    };

    view! {
        <li class="doctors-page__card">
            <span class="doctors-page__name">{doctor.name.clone()}</span>
            <span class="doctors-page__speciality">
                {doctor.speciality.clone().unwrap_or_default()}
            </span>
            {doctor.fees.map(|f| view! { <span class="doctors-page__fees">{format!("{f:.0} per visit")}</span> })}
            <button class=if following { "btn" } else { "btn btn--primary" } on:click=toggle>
                {if following { "Unfollow" } else { "Follow" }}
            </button>
        </li>
    }
}
