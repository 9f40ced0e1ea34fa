//! Static legal pages, reachable without authentication.

use leptos::prelude::*;

/// Terms of service.
#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Terms of service"</h1>
            <p>
                "MediLink connects patients with licensed practitioners. The
                 platform does not provide medical advice; consult a doctor for
                 any health decision. Accounts that misrepresent professional
                 credentials are removed."
            </p>
        </div>
    }
}

/// Privacy policy.
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Privacy policy"</h1>
            <p>
                "Your medical records are only visible to you and the doctors you
                 choose to share them with. Uploaded images are stored with our
                 media provider and linked to your account; delete your account
                 to remove them."
            </p>
        </div>
    }
}
