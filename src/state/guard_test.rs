use super::*;
use crate::net::error::ApiError;
use crate::net::types::{ApprovalStatus, DoctorProfile};

fn user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role,
        ..User::default()
    }
}

fn session(role: Role) -> SessionState {
    let mut state = SessionState::default();
    state.apply_login("tok-1".to_owned(), user(role));
    state
}

const ALL_ROLES: [Role; 3] = [Role::Patient, Role::Doctor, Role::Admin];

// =============================================================
// Guard outcomes by phase
// =============================================================

#[test]
fn loading_session_renders_placeholder() {
    let mut state = SessionState::default();
    state.begin_rehydrate("tok-1".to_owned());
    assert_eq!(evaluate(&state, &ALL_ROLES), GuardOutcome::Loading);
}

#[test]
fn anonymous_session_redirects_to_login() {
    let state = SessionState::default();
    assert_eq!(evaluate(&state, &ALL_ROLES), GuardOutcome::RedirectLogin);
}

#[test]
fn error_phase_redirects_to_login_without_rendering() {
    let mut state = SessionState::default();
    state.begin_rehydrate("tok-1".to_owned());
    state.finish_rehydrate("tok-1", Err(ApiError::Network));
    assert_eq!(evaluate(&state, &ALL_ROLES), GuardOutcome::RedirectLogin);
}

// =============================================================
// Role gating
// =============================================================

#[test]
fn content_renders_iff_role_is_allowed() {
    for role in ALL_ROLES {
        for allowed in [
            &[Role::Patient][..],
            &[Role::Doctor][..],
            &[Role::Admin][..],
            &[Role::Patient, Role::Doctor][..],
            &ALL_ROLES[..],
        ] {
            let outcome = evaluate(&session(role), allowed);
            if allowed.contains(&role) {
                assert_eq!(outcome, GuardOutcome::Allow, "role {role:?} in {allowed:?}");
            } else {
                assert_eq!(
                    outcome,
                    GuardOutcome::Redirect(landing_route(role)),
                    "role {role:?} not in {allowed:?}"
                );
            }
        }
    }
}

#[test]
fn disallowed_role_redirects_to_its_own_landing() {
    assert_eq!(
        evaluate(&session(Role::Doctor), &[Role::Admin]),
        GuardOutcome::Redirect("/dashboard")
    );
    assert_eq!(
        evaluate(&session(Role::Patient), &[Role::Doctor]),
        GuardOutcome::Redirect("/")
    );
    assert_eq!(
        evaluate(&session(Role::Admin), &[Role::Patient]),
        GuardOutcome::Redirect("/admin")
    );
}

// =============================================================
// Navigation tables
// =============================================================

#[test]
fn landing_routes_per_role() {
    assert_eq!(landing_route(Role::Patient), "/");
    assert_eq!(landing_route(Role::Doctor), "/dashboard");
    assert_eq!(landing_route(Role::Admin), "/admin");
}

#[test]
fn patient_login_lands_home() {
    assert_eq!(post_login_route(&user(Role::Patient)), "/");
}

#[test]
fn admin_login_lands_on_admin_dashboard() {
    assert_eq!(post_login_route(&user(Role::Admin)), "/admin");
}

#[test]
fn pending_doctor_login_lands_on_pending_screen() {
    let mut doctor = user(Role::Doctor);
    doctor.doctor_profile = Some(DoctorProfile {
        approval_status: ApprovalStatus::Pending,
        ..DoctorProfile::default()
    });
    assert_eq!(post_login_route(&doctor), "/doctor/pending");
}

#[test]
fn approved_doctor_login_lands_on_dashboard() {
    let mut doctor = user(Role::Doctor);
    doctor.doctor_profile = Some(DoctorProfile {
        approval_status: ApprovalStatus::Approved,
        ..DoctorProfile::default()
    });
    assert_eq!(post_login_route(&doctor), "/dashboard");
}

#[test]
fn registration_routes_doctors_to_profile_creation() {
    assert_eq!(post_register_route(&user(Role::Doctor)), "/doctor/profile/new");
    assert_eq!(post_register_route(&user(Role::Patient)), "/");
    assert_eq!(post_register_route(&user(Role::Admin)), "/");
}
