#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::ApiError;
use crate::net::types::{Role, User, UserPatch};

/// Single source of truth for "who is logged in".
///
/// The fields are only ever written from the main cooperative task, so there
/// is no locking; ordering between a login and a slower in-flight rehydration
/// is resolved by the last-token-wins check in [`finish_rehydrate`].
///
/// All transitions here are pure. Navigation is decided separately from the
/// resulting state (see `state::guard`), and the async orchestration lives in
/// `state::actions`.
///
/// [`finish_rehydrate`]: SessionState::finish_rehydrate
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Bearer token. Presence of a token is what distinguishes `Anonymous`
    /// from every other phase.
    pub token: Option<String>,
    /// Current user record, populated by rehydration or login.
    pub user: Option<User>,
    /// A user fetch for the current token is in flight.
    pub fetching: bool,
    /// Message from a rehydration failure that did not invalidate the token.
    pub error: Option<String>,
}

/// Lifecycle phase derived from the session fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No token.
    Anonymous,
    /// Token present, user fetch in flight.
    Loading,
    /// Token and user both present.
    Authenticated,
    /// Token present but the last user fetch failed for a non-auth reason;
    /// the token is retained so a retry does not force re-login.
    Error,
}

/// What a completed rehydration did to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RehydrateOutcome {
    /// User stored; session is authenticated.
    Applied,
    /// Token was rejected (401/403) and has been cleared.
    SignedOut,
    /// Transport/server failure; token retained, error recorded.
    Failed(String),
    /// The token changed (or a login landed) while the fetch was in flight;
    /// the result was discarded.
    Stale,
}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.token.is_none() {
            Phase::Anonymous
        } else if self.user.is_some() {
            Phase::Authenticated
        } else if self.fetching {
            Phase::Loading
        } else {
            Phase::Error
        }
    }

    /// Holds iff both token and user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// A token became present (from storage at init, or changed value):
    /// enter `Loading` and start a user fetch keyed on that token.
    pub fn begin_rehydrate(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.fetching = true;
        self.error = None;
    }

    /// Apply the result of a user fetch started for `token_at_fetch`.
    ///
    /// Last-token-wins: the result is discarded when the token it was
    /// fetched for no longer matches the current token, or when no fetch is
    /// considered in flight anymore (a login superseded it).
    pub fn finish_rehydrate(
        &mut self,
        token_at_fetch: &str,
        result: Result<User, ApiError>,
    ) -> RehydrateOutcome {
        if self.token.as_deref() != Some(token_at_fetch) || !self.fetching {
            return RehydrateOutcome::Stale;
        }

        self.fetching = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.error = None;
                RehydrateOutcome::Applied
            }
            Err(e) if e.is_auth() => {
                self.token = None;
                self.user = None;
                self.error = None;
                RehydrateOutcome::SignedOut
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                RehydrateOutcome::Failed(message)
            }
        }
    }

    /// A successful login or registration. Supersedes any in-flight
    /// rehydration: clearing `fetching` makes its late result stale.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.fetching = false;
        self.error = None;
    }

    /// Reset to the empty session. Safe and idempotent from any state.
    pub fn apply_logout(&mut self) {
        *self = Self::default();
    }

    /// Shallow-merge present patch fields into the current user record.
    /// No-op when no user is present.
    pub fn merge_user(&mut self, patch: &UserPatch) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        if let Some(name) = &patch.name {
            user.name = name.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(image) = &patch.profile_image {
            user.profile_image = Some(image.clone());
        }
        if let Some(profile) = &patch.doctor_profile {
            user.doctor_profile = Some(profile.clone());
        }
        if let Some(profile) = &patch.patient_profile {
            user.patient_profile = Some(profile.clone());
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Patch a fetched user with the local backup when the server dropped the
/// profile image. Applies the backup only when the server value is absent —
/// a present server value always wins. Returns `true` when the backup was
/// applied (the caller should best-effort resubmit it).
pub fn reconcile_profile_image(user: &mut User, backup: Option<String>) -> bool {
    if user.profile_image.is_some() {
        return false;
    }
    match backup {
        Some(image) => {
            user.profile_image = Some(image);
            true
        }
        None => false,
    }
}

/// Whether a reconciled profile image should be resubmitted to the server.
///
/// Only when the backup was applied *and* the rehydration result actually
/// landed: a stale or failed fetch must not issue writes on behalf of a
/// session it no longer represents.
pub fn should_resubmit(outcome: &RehydrateOutcome, backup_applied: bool) -> bool {
    backup_applied && matches!(outcome, RehydrateOutcome::Applied)
}

/// User-facing message for a failed login.
///
/// Bad credentials come back as 401, which the generic classifier words as
/// an expired session; reword it here. Other failures keep their classified
/// message (which already prefers the server-provided text for 4xx).
pub fn login_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized | ApiError::Forbidden => {
            "Invalid email or password.".to_owned()
        }
        other => other.to_string(),
    }
}
