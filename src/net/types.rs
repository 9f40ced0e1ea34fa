//! Wire types shared with the REST API.
//!
//! The upstream API speaks camelCase JSON; every struct here carries a
//! `rename_all` so the Rust side stays snake_case. Compatibility quirks in
//! the upstream contract are absorbed at this boundary (see
//! [`DoctorSummary::is_following`]) so nothing downstream ever sees them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Closed set — every role-dependent decision in the client
/// is an exhaustive match on this enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Patient,
    Doctor,
    Admin,
}

/// Review state of a doctor profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Doctor-specific profile sub-record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    #[serde(default)]
    pub speciality: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub fees: Option<f64>,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
}

/// Patient-specific profile sub-record (medical summary fields).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
}

/// The current-user record owned by the session store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub doctor_profile: Option<DoctorProfile>,
    #[serde(default)]
    pub patient_profile: Option<PatientProfile>,
}

impl User {
    /// Whether this is a doctor whose profile is still awaiting review.
    pub fn is_pending_doctor(&self) -> bool {
        self.role == Role::Doctor
            && self
                .doctor_profile
                .as_ref()
                .is_none_or(|p| p.approval_status == ApprovalStatus::Pending)
    }
}

/// Partial user update. Only present fields are sent and merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_profile: Option<DoctorProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_profile: Option<PatientProfile>,
}

impl UserPatch {
    /// Patch from the details form. Blank inputs mean "leave unchanged",
    /// never "overwrite with an empty string".
    pub fn details(name: &str, phone: &str) -> Self {
        Self {
            name: Some(name.trim().to_owned()).filter(|s| !s.is_empty()),
            phone: Some(phone.trim().to_owned()).filter(|s| !s.is_empty()),
            ..Self::default()
        }
    }
}

/// Login request body.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body.
///
/// `role` defaults to patient and `accepted_terms` defaults to `true` to
/// stay compatible with older call shapes that omitted both fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub accepted_terms: bool,
}

fn default_true() -> bool {
    true
}

/// Successful login/registration response: the bearer token plus the user
/// record it authenticates.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Password change request body. Fire-and-forget on the client side.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

/// A doctor as shown in discovery lists.
///
/// The upstream API has been observed reporting following state under four
/// different field names (`isFollowing`, `isFollowed`, `followed`,
/// `following`); all spellings deserialize into the one canonical flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub speciality: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub fees: Option<f64>,
    #[serde(
        default,
        rename = "isFollowing",
        alias = "isFollowed",
        alias = "followed",
        alias = "following"
    )]
    pub is_following: bool,
}

/// A conversation summary for the chat screen.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub partner_id: String,
    pub partner_name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread: u32,
}

/// A single chat message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: f64,
}

/// Result of a disease-image detection request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub label: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub advice: Option<String>,
}

/// Aggregate counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub patients: u64,
    #[serde(default)]
    pub doctors: u64,
    #[serde(default)]
    pub pending_doctors: u64,
    #[serde(default)]
    pub messages: u64,
}
