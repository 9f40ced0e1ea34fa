//! Pending-approval screen for doctors awaiting review.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Shown to doctors whose profile has not been approved yet.
#[component]
pub fn PendingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let status_line = move || {
        session
            .get()
            .user
            .and_then(|u| u.doctor_profile)
            .map_or_else(
                || "Your professional profile has not been submitted yet.".to_owned(),
                |p| {
                    let status = format!("{:?}", p.approval_status).to_lowercase();
                    format!("Current status: {status}")
                },
            )
    };

    view! {
        <div class="pending-page">
            <h1>"Profile under review"</h1>
            <p>
                "Thanks for registering as a doctor. An administrator reviews every
                 professional profile before it goes live; you will be able to use
                 the dashboard once yours is approved."
            </p>
            <p class="pending-page__status">{status_line}</p>
            <p>
                <a href="/profile">"Review your profile"</a>
            </p>
        </div>
    }
}
