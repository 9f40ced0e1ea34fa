use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn classifies_auth_statuses() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
}

#[test]
fn classifies_not_found_and_server_errors() {
    assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
    assert_eq!(ApiError::from_status(500, None), ApiError::Server(500));
    assert_eq!(ApiError::from_status(503, None), ApiError::Server(503));
}

#[test]
fn bad_request_uses_server_message() {
    let body = serde_json::json!({"message": "Email already registered"});
    assert_eq!(
        ApiError::from_status(400, Some(&body)),
        ApiError::BadRequest("Email already registered".to_owned())
    );
}

#[test]
fn bad_request_without_body_falls_back_to_generic() {
    assert_eq!(
        ApiError::from_status(422, None),
        ApiError::BadRequest(GENERIC_MESSAGE.to_owned())
    );
}

#[test]
fn only_401_and_403_invalidate_the_session() {
    assert!(ApiError::Unauthorized.is_auth());
    assert!(ApiError::Forbidden.is_auth());
    assert!(!ApiError::NotFound.is_auth());
    assert!(!ApiError::Network.is_auth());
    assert!(!ApiError::Server(500).is_auth());
}

// =============================================================
// Payload-free endpoints
// =============================================================

#[test]
fn unit_success_needs_no_body() {
    // Follow/unfollow and password change return empty 2xx bodies.
    assert_eq!(classify_unit(200, None), Ok(()));
    assert_eq!(classify_unit(204, None), Ok(()));
}

#[test]
fn unit_success_ignores_any_body_shape() {
    let body = serde_json::json!({"status": "ok"});
    assert_eq!(classify_unit(201, Some(&body)), Ok(()));
}

#[test]
fn unit_failures_classify_like_any_other_call() {
    assert_eq!(classify_unit(401, None), Err(ApiError::Unauthorized));
    assert_eq!(classify_unit(502, None), Err(ApiError::Server(502)));

    let body = serde_json::json!({"message": "Current password is incorrect."});
    assert_eq!(
        classify_unit(400, Some(&body)),
        Err(ApiError::BadRequest("Current password is incorrect.".to_owned()))
    );
}

// =============================================================
// Message aggregation
// =============================================================

#[test]
fn aggregate_joins_field_level_errors() {
    let body = serde_json::json!({
        "errors": [
            {"field": "email", "message": "Email is required."},
            {"field": "password", "message": "Password is too short."}
        ]
    });
    assert_eq!(
        aggregate_error_message(&body),
        "Email is required. Password is too short."
    );
}

#[test]
fn aggregate_accepts_plain_string_errors() {
    let body = serde_json::json!({"errors": ["Name is required."]});
    assert_eq!(aggregate_error_message(&body), "Name is required.");
}

#[test]
fn aggregate_prefers_message_then_error() {
    let body = serde_json::json!({"message": "m1", "error": "m2"});
    assert_eq!(aggregate_error_message(&body), "m1");

    let body = serde_json::json!({"error": "m2"});
    assert_eq!(aggregate_error_message(&body), "m2");
}

#[test]
fn aggregate_empty_errors_array_falls_through_to_message() {
    let body = serde_json::json!({"errors": [], "message": "outer"});
    assert_eq!(aggregate_error_message(&body), "outer");
}

#[test]
fn aggregate_falls_back_to_generic() {
    let body = serde_json::json!({"unexpected": 1});
    assert_eq!(aggregate_error_message(&body), GENERIC_MESSAGE);
}

#[test]
fn display_messages_are_user_facing() {
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "Your session has expired. Please sign in again."
    );
    assert_eq!(
        ApiError::Network.to_string(),
        "Could not reach the server. Check your connection."
    );
}
