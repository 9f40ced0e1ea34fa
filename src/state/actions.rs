//! Async session operations and the central API error handler.
//!
//! Each operation issues the REST call, applies the corresponding pure
//! transition on the shared session signal, and surfaces the outcome as a
//! toast. Operations return `bool` success instead of propagating errors so
//! callers never need exception handling; navigation is decided separately
//! by callers from the resulting state (`state::guard`). The network-driven
//! operations are browser-only; `handle_api_error`, `handle_fetch`, and
//! `logout` touch no network and build everywhere.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::error::ApiError;
use crate::state::notify::{NotifyState, ToastKind};
use crate::state::session::SessionState;
use crate::util::storage;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::net::types::{RegisterRequest, UserPatch};
#[cfg(feature = "hydrate")]
use crate::state::session::{
    RehydrateOutcome, login_failure_message, reconcile_profile_image, should_resubmit,
};

/// Start session rehydration from the stored token, if any.
///
/// Called once from the root component on mount. A missing token leaves the
/// session anonymous without any request.
#[cfg(feature = "hydrate")]
pub fn init_session(session: RwSignal<SessionState>, notify: RwSignal<NotifyState>) {
    let Some(token) = storage::read_token() else {
        return;
    };
    session.update(|s| s.begin_rehydrate(token.clone()));
    leptos::task::spawn_local(rehydrate(session, notify, token));
}

/// Fetch the user for `token` and apply the result (last-token-wins).
///
/// Writes that depend on the fetched user (refreshing the backup slot,
/// resubmitting a reconciled image) happen only after the result was
/// actually applied; a superseded fetch must not touch storage or the
/// server.
#[cfg(feature = "hydrate")]
async fn rehydrate(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    token: String,
) {
    let mut resubmit: Option<UserPatch> = None;
    let mut fresh_image: Option<String> = None;

    let result = api::fetch_current_user().await.map(|mut user| {
        if reconcile_profile_image(&mut user, storage::read_image_backup()) {
            // The server dropped a previously set image; remember the
            // patched value for a best-effort resubmit.
            resubmit = Some(UserPatch {
                profile_image: user.profile_image.clone(),
                ..UserPatch::default()
            });
        } else {
            fresh_image = user.profile_image.clone();
        }
        user
    });

    let outcome = session
        .try_update(|s| s.finish_rehydrate(&token, result))
        .unwrap_or(RehydrateOutcome::Stale);

    match &outcome {
        RehydrateOutcome::Applied => {
            if let Some(image) = &fresh_image {
                storage::write_image_backup(image);
            }
        }
        RehydrateOutcome::SignedOut => {
            storage::clear_token();
            notify.update(|n| {
                n.push(ToastKind::Error, ApiError::Unauthorized.to_string());
            });
        }
        RehydrateOutcome::Failed(message) => {
            let message = message.clone();
            notify.update(|n| {
                n.push(ToastKind::Error, message);
            });
        }
        RehydrateOutcome::Stale => {}
    }

    if should_resubmit(&outcome, resubmit.is_some()) {
        if let Some(patch) = resubmit.take() {
            leptos::task::spawn_local(async move {
                let _ = api::update_profile(&patch).await;
            });
        }
    }
}

/// Authenticate. On success the token is persisted and the session set; on
/// failure the session is untouched and the message surfaced.
#[cfg(feature = "hydrate")]
pub async fn login(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    email: &str,
    password: &str,
) -> bool {
    match api::login(email, password).await {
        Ok(auth) => {
            storage::write_token(&auth.token);
            if let Some(image) = &auth.user.profile_image {
                storage::write_image_backup(image);
            }
            session.update(|s| s.apply_login(auth.token, auth.user));
            true
        }
        Err(e) => {
            notify.update(|n| {
                n.push(ToastKind::Error, login_failure_message(&e));
            });
            false
        }
    }
}

/// Create an account and sign in with the returned token.
#[cfg(feature = "hydrate")]
pub async fn register(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    payload: RegisterRequest,
) -> bool {
    match api::register(&payload).await {
        Ok(auth) => {
            storage::write_token(&auth.token);
            session.update(|s| s.apply_login(auth.token, auth.user));
            true
        }
        Err(e) => {
            notify.update(|n| {
                n.push(ToastKind::Error, e.to_string());
            });
            false
        }
    }
}

/// Clear the session unconditionally. Safe from any state.
pub fn logout(session: RwSignal<SessionState>, notify: RwSignal<NotifyState>) {
    storage::clear_token();
    session.update(SessionState::apply_logout);
    notify.update(|n| {
        n.push(ToastKind::Info, "You have been signed out.");
    });
}

/// Submit a profile update and merge it locally after server confirmation.
/// A profile image in the patch also refreshes the backup slot.
#[cfg(feature = "hydrate")]
pub async fn update_user(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    patch: UserPatch,
) -> bool {
    match api::update_profile(&patch).await {
        Ok(_) => {
            if let Some(image) = &patch.profile_image {
                storage::write_image_backup(image);
            }
            session.update(|s| s.merge_user(&patch));
            notify.update(|n| {
                n.push(ToastKind::Success, "Profile updated.");
            });
            true
        }
        Err(e) => {
            handle_api_error(session, notify, &e);
            false
        }
    }
}

/// Change the password. Fire-and-forget: session state is never mutated,
/// only a toast is surfaced.
#[cfg(feature = "hydrate")]
pub async fn update_password(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    current: &str,
    new: &str,
) {
    match api::update_password(current, new).await {
        Ok(()) => notify.update(|n| {
            n.push(ToastKind::Success, "Password updated.");
        }),
        Err(e) => handle_api_error(session, notify, &e),
    }
}

/// Central handler for failures from any authenticated request.
///
/// Every classification surfaces one toast; only a 401 mutates shared
/// session state (token cleared, session reset), after which the route
/// guards redirect to the login screen regardless of which screen issued
/// the request.
pub fn handle_api_error(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    error: &ApiError,
) {
    leptos::logging::warn!("api error: {error}");
    notify.update(|n| {
        n.push(ToastKind::Error, error.to_string());
    });
    if matches!(error, ApiError::Unauthorized) {
        storage::clear_token();
        session.update(SessionState::apply_logout);
    }
}

/// Route a read-path result through the central handler before it is
/// rendered inline.
///
/// Suspense fetchers render their errors in place, so without this an
/// expired token discovered by a list fetch would leave a dead session
/// signed in. Passing every fetch result through here keeps the contract
/// uniform: a 401 clears the session no matter which screen hit it.
pub fn handle_fetch<T>(
    session: RwSignal<SessionState>,
    notify: RwSignal<NotifyState>,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Err(e) = &result {
        handle_api_error(session, notify, e);
    }
    result
}
