//! Professional-profile creation for freshly registered doctors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{ApprovalStatus, DoctorProfile, UserPatch};
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

/// Form collecting the doctor profile submitted for admin review.
#[component]
pub fn DoctorProfileNewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let speciality = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());
    let fees = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if pending.get_untracked() || speciality.get_untracked().trim().is_empty() {
            return;
        }

        let patch = UserPatch {
            doctor_profile: Some(DoctorProfile {
                speciality: Some(speciality.get_untracked().trim().to_owned()),
                experience_years: experience.get_untracked().trim().parse().ok(),
                fees: fees.get_untracked().trim().parse().ok(),
                approval_status: ApprovalStatus::Pending,
            }),
            ..UserPatch::default()
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            leptos::task::spawn_local(async move {
                let ok = crate::state::actions::update_user(session, notify, patch).await;
                pending.set(false);
                if ok {
                    navigate("/doctor/pending", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &notify, &navigate, patch, NavigateOptions::default());
        }
    });

    view! {
        <div class="doctor-profile-page">
            <h1>"Set up your professional profile"</h1>
            <p>"These details are reviewed by an administrator before your profile goes live."</p>

            <form class="doctor-profile-page__form" on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }>
                <label class="form__label">
                    "Speciality"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || speciality.get()
                        on:input=move |ev| speciality.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Years of experience"
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || experience.get()
                        on:input=move |ev| experience.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Consultation fee"
                    <input
                        class="form__input"
                        type="number"
                        prop:value=move || fees.get()
                        on:input=move |ev| fees.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Submitting..." } else { "Submit for review" }}
                </button>
            </form>
        </div>
    }
}
