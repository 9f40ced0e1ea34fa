use super::*;

// =============================================================
// Role serde
// =============================================================

#[test]
fn role_round_trips_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
    assert_eq!(
        serde_json::from_str::<Role>("\"admin\"").unwrap(),
        Role::Admin
    );
}

#[test]
fn role_defaults_to_patient() {
    assert_eq!(Role::default(), Role::Patient);
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Ada",
        "email": "ada@example.com",
        "role": "doctor",
        "profileImage": "https://img.example/a.png",
        "doctorProfile": {"speciality": "Cardiology", "approvalStatus": "approved"}
    }))
    .expect("user");

    assert_eq!(user.role, Role::Doctor);
    assert_eq!(user.profile_image.as_deref(), Some("https://img.example/a.png"));
    let profile = user.doctor_profile.expect("doctor profile");
    assert_eq!(profile.approval_status, ApprovalStatus::Approved);
}

#[test]
fn doctor_without_profile_counts_as_pending() {
    let user = User {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Doctor,
        ..User::default()
    };
    assert!(user.is_pending_doctor());
}

#[test]
fn approved_doctor_is_not_pending() {
    let user = User {
        role: Role::Doctor,
        doctor_profile: Some(DoctorProfile {
            approval_status: ApprovalStatus::Approved,
            ..DoctorProfile::default()
        }),
        ..User::default()
    };
    assert!(!user.is_pending_doctor());
}

#[test]
fn patient_is_never_pending_doctor() {
    let user = User { role: Role::Patient, ..User::default() };
    assert!(!user.is_pending_doctor());
}

// =============================================================
// RegisterRequest defaults
// =============================================================

#[test]
fn register_request_defaults_role_and_terms() {
    let req: RegisterRequest = serde_json::from_value(serde_json::json!({
        "name": "Bea",
        "email": "bea@example.com",
        "password": "pw",
        "confirmPassword": "pw"
    }))
    .expect("register request");

    assert_eq!(req.role, Role::Patient);
    assert!(req.accepted_terms);
    assert!(req.phone.is_none());
}

// =============================================================
// UserPatch serialization
// =============================================================

#[test]
fn user_patch_skips_absent_fields() {
    let patch = UserPatch {
        phone: Some("555-0100".to_owned()),
        ..UserPatch::default()
    };
    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({"phone": "555-0100"}));
}

#[test]
fn details_patch_trims_and_keeps_filled_fields() {
    let patch = UserPatch::details("  Ada  ", "555-0100");
    assert_eq!(patch.name.as_deref(), Some("Ada"));
    assert_eq!(patch.phone.as_deref(), Some("555-0100"));
}

#[test]
fn details_patch_omits_blank_fields() {
    // A cleared phone input must not wipe the stored number.
    let patch = UserPatch::details("Ada", "   ");
    assert_eq!(patch.name.as_deref(), Some("Ada"));
    assert!(patch.phone.is_none());

    let value = serde_json::to_value(&patch).unwrap();
    assert_eq!(value, serde_json::json!({"name": "Ada"}));
}

#[test]
fn blank_details_patch_is_empty() {
    let patch = UserPatch::details("", "");
    assert_eq!(patch, UserPatch::default());
}

// =============================================================
// Follow-status compatibility shim
// =============================================================

#[test]
fn follow_flag_accepts_every_observed_spelling() {
    for field in ["isFollowing", "isFollowed", "followed", "following"] {
        let doc: DoctorSummary = serde_json::from_value(serde_json::json!({
            "id": "d-1",
            "name": "Dr. Chen",
            field: true
        }))
        .expect("doctor summary");
        assert!(doc.is_following, "field {field} should set the flag");
    }
}

#[test]
fn follow_flag_defaults_to_false_when_absent() {
    let doc: DoctorSummary =
        serde_json::from_value(serde_json::json!({"id": "d-1", "name": "Dr. Chen"})).unwrap();
    assert!(!doc.is_following);
}

#[test]
fn follow_flag_serializes_canonical_spelling_only() {
    let doc = DoctorSummary {
        id: "d-1".to_owned(),
        name: "Dr. Chen".to_owned(),
        is_following: true,
        ..DoctorSummary::default()
    };
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value.get("isFollowing"), Some(&serde_json::json!(true)));
    assert!(value.get("followed").is_none());
}
