use super::*;

// =============================================================
// URL construction
// =============================================================

#[test]
fn url_defaults_to_same_origin() {
    // No MEDILINK_API_BASE in the test environment.
    assert_eq!(url("/api/auth/me"), "/api/auth/me");
}

#[test]
fn upload_timeout_exceeds_standard_timeout() {
    assert!(UPLOAD_TIMEOUT_MS > STANDARD_TIMEOUT_MS);
}
