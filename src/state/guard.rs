#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::{Role, User};
use crate::state::session::{Phase, SessionState};

/// What a guarded route should render for the current session.
///
/// Pure function of session state — the guard component holds no state of
/// its own and performs the redirects this module decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session is still loading; render a placeholder.
    Loading,
    /// Not signed in; redirect to `/login`.
    RedirectLogin,
    /// Signed in but the role is not allowed here; redirect to the role's
    /// landing screen.
    Redirect(&'static str),
    /// Render the guarded content.
    Allow,
}

/// Decide what to do with a route requiring one of `allowed` roles.
pub fn evaluate(session: &SessionState, allowed: &[Role]) -> GuardOutcome {
    match session.phase() {
        Phase::Loading => GuardOutcome::Loading,
        // The error phase keeps the token for retry but has no user record,
        // so guarded content can never render; the login page is the retry
        // surface.
        Phase::Anonymous | Phase::Error => GuardOutcome::RedirectLogin,
        Phase::Authenticated => match session.role() {
            Some(role) if allowed.contains(&role) => GuardOutcome::Allow,
            Some(role) => GuardOutcome::Redirect(landing_route(role)),
            None => GuardOutcome::RedirectLogin,
        },
    }
}

/// Landing screen for each role.
pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Patient => "/",
        Role::Doctor => "/dashboard",
        Role::Admin => "/admin",
    }
}

/// Navigation target after a successful login.
pub fn post_login_route(user: &User) -> &'static str {
    match user.role {
        Role::Doctor if user.is_pending_doctor() => "/doctor/pending",
        Role::Doctor => "/dashboard",
        Role::Admin => "/admin",
        Role::Patient => "/",
    }
}

/// Navigation target after a successful registration: doctors go on to
/// create their professional profile, everyone else lands home.
pub fn post_register_route(user: &User) -> &'static str {
    match user.role {
        Role::Doctor => "/doctor/profile/new",
        Role::Patient | Role::Admin => "/",
    }
}
