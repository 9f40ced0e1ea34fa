use leptos::prelude::{GetUntracked, RwSignal};

use super::{handle_api_error, handle_fetch, logout};
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::{Phase, SessionState};

fn signed_in() -> (RwSignal<SessionState>, RwSignal<NotifyState>) {
    let mut state = SessionState::default();
    state.apply_login(
        "tok-1".to_owned(),
        User {
            id: "u-1".to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            role: Role::Patient,
            ..User::default()
        },
    );
    (RwSignal::new(state), RwSignal::new(NotifyState::default()))
}

// =============================================================
// Central error handling: reads and writes behave identically
// =============================================================

#[test]
fn unauthorized_fetch_signs_the_session_out() {
    let (session, notify) = signed_in();

    let result: Result<Vec<String>, ApiError> = Err(ApiError::Unauthorized);
    let passed = handle_fetch(session, notify, result);

    assert_eq!(passed, Err(ApiError::Unauthorized));
    assert_eq!(session.get_untracked().phase(), Phase::Anonymous);
    assert!(session.get_untracked().token.is_none());

    let toasts = notify.get_untracked().toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Error);
    assert_eq!(toasts[0].message, ApiError::Unauthorized.to_string());
}

#[test]
fn forbidden_fetch_keeps_the_session() {
    let (session, notify) = signed_in();

    let _ = handle_fetch::<Vec<String>>(session, notify, Err(ApiError::Forbidden));

    assert_eq!(session.get_untracked().phase(), Phase::Authenticated);
    assert_eq!(notify.get_untracked().toasts.len(), 1);
}

#[test]
fn network_fetch_error_keeps_the_session() {
    let (session, notify) = signed_in();

    let _ = handle_fetch::<Vec<String>>(session, notify, Err(ApiError::Network));

    assert_eq!(session.get_untracked().phase(), Phase::Authenticated);
    assert_eq!(session.get_untracked().token.as_deref(), Some("tok-1"));
    assert_eq!(
        notify.get_untracked().toasts[0].message,
        ApiError::Network.to_string()
    );
}

#[test]
fn successful_fetch_passes_through_untouched() {
    let (session, notify) = signed_in();

    let result = handle_fetch(session, notify, Ok(vec!["d-1".to_owned()]));

    assert_eq!(result, Ok(vec!["d-1".to_owned()]));
    assert_eq!(session.get_untracked().phase(), Phase::Authenticated);
    assert!(notify.get_untracked().toasts.is_empty());
}

#[test]
fn every_classification_surfaces_one_toast() {
    for error in [
        ApiError::NotFound,
        ApiError::BadRequest("Email is required.".to_owned()),
        ApiError::Server(502),
        ApiError::Request,
    ] {
        let (session, notify) = signed_in();
        handle_api_error(session, notify, &error);

        let toasts = notify.get_untracked().toasts;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, error.to_string());
        // Only a 401 invalidates the session.
        assert_eq!(session.get_untracked().phase(), Phase::Authenticated);
    }
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_resets_the_session_and_announces_it() {
    let (session, notify) = signed_in();

    logout(session, notify);

    assert_eq!(session.get_untracked().phase(), Phase::Anonymous);
    let toasts = notify.get_untracked().toasts;
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Info);
}
