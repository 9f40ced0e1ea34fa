use super::*;

// =============================================================
// Preset fallback sequence
// =============================================================

#[test]
fn preset_sequence_is_nonempty_and_distinct() {
    assert!(!UPLOAD_PRESETS.is_empty());
    for (i, a) in UPLOAD_PRESETS.iter().enumerate() {
        for b in &UPLOAD_PRESETS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn preferred_preset_comes_first() {
    assert_eq!(UPLOAD_PRESETS[0], "medilink_uploads");
}

// =============================================================
// Upload response parsing
// =============================================================

#[test]
fn extract_prefers_secure_url() {
    let body = serde_json::json!({
        "secure_url": "https://cdn.example/a.png",
        "url": "http://cdn.example/a.png"
    });
    assert_eq!(
        extract_upload_url(&body).as_deref(),
        Some("https://cdn.example/a.png")
    );
}

#[test]
fn extract_falls_back_to_plain_url() {
    let body = serde_json::json!({"url": "http://cdn.example/a.png"});
    assert_eq!(
        extract_upload_url(&body).as_deref(),
        Some("http://cdn.example/a.png")
    );
}

#[test]
fn extract_rejects_bodies_without_a_url() {
    assert!(extract_upload_url(&serde_json::json!({"public_id": "x"})).is_none());
}
