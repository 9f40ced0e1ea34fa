//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `ApiError::Request` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified into an [`ApiError`] before it leaves this
//! module: bearer-token problems, missing resources, server faults, and
//! transport failures (including timeouts) all collapse into the taxonomy in
//! `net::error`. Callers never see a raw `gloo_net::Error`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AdminStats, ApprovalStatus, AuthResponse, ChatMessage, Conversation, DetectionResult,
    DoctorSummary, RegisterRequest, User, UserPatch,
};

/// Timeout for standard JSON calls.
pub const STANDARD_TIMEOUT_MS: u32 = 10_000;
/// Extended timeout for file uploads.
pub const UPLOAD_TIMEOUT_MS: u32 = 60_000;

/// Join a request path onto the configured API base.
///
/// The base defaults to same-origin (empty prefix, reverse-proxied in
/// deployment) and can be overridden at build time via `MEDILINK_API_BASE`.
pub fn url(path: &str) -> String {
    let base = option_env!("MEDILINK_API_BASE").unwrap_or("");
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(feature = "hydrate")]
mod web {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::net::error::ApiError;

    /// Attach the bearer token to a request builder if one is stored.
    pub fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match crate::util::storage::read_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Send a built request, racing it against the class timeout.
    pub async fn send(
        request: gloo_net::http::Request,
        timeout_ms: u32,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use futures::future::{Either, select};

        let send = Box::pin(request.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms));

        match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| {
                leptos::logging::warn!("request failed: {e}");
                ApiError::Network
            }),
            Either::Right(((), _)) => Err(ApiError::Network),
        }
    }

    /// Decode a response, classifying non-2xx statuses.
    pub async fn decode<T: DeserializeOwned>(
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if response.ok() {
            response.json::<T>().await.map_err(|_| ApiError::Request)
        } else {
            let body = response.json::<serde_json::Value>().await.ok();
            Err(ApiError::from_status(response.status(), body.as_ref()))
        }
    }

    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::get(&super::url(path)))
            .build()
            .map_err(|_| ApiError::Request)?;
        decode(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::post(&super::url(path)))
            .json(body)
            .map_err(|_| ApiError::Request)?;
        decode(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::put(&super::url(path)))
            .json(body)
            .map_err(|_| ApiError::Request)?;
        decode(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }

    pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let request = authorize(gloo_net::http::Request::delete(&super::url(path)))
            .build()
            .map_err(|_| ApiError::Request)?;
        decode(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }

    /// Decode a response whose success carries no payload. 2xx responses
    /// are accepted without reading the body, which servers often leave
    /// empty for these endpoints.
    pub async fn decode_unit(response: gloo_net::http::Response) -> Result<(), ApiError> {
        let body = if response.ok() {
            None
        } else {
            response.json::<serde_json::Value>().await.ok()
        };
        crate::net::error::classify_unit(response.status(), body.as_ref())
    }

    pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
        let request = authorize(gloo_net::http::Request::post(&super::url(path)))
            .json(body)
            .map_err(|_| ApiError::Request)?;
        decode_unit(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }

    pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
        let request = authorize(gloo_net::http::Request::put(&super::url(path)))
            .json(body)
            .map_err(|_| ApiError::Request)?;
        decode_unit(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }

    pub async fn delete_unit(path: &str) -> Result<(), ApiError> {
        let request = authorize(gloo_net::http::Request::delete(&super::url(path)))
            .build()
            .map_err(|_| ApiError::Request)?;
        decode_unit(send(request, super::STANDARD_TIMEOUT_MS).await?).await
    }
}

/// Authenticate with email and password.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        web::post_json("/api/auth/login", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Request)
    }
}

/// Create an account.
pub async fn register(payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::post_json("/api/auth/register", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Request)
    }
}

/// Fetch the user record for the stored bearer token.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::get_json("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Request)
    }
}

/// Update the current user's profile. Returns the merged server record.
pub async fn update_profile(patch: &UserPatch) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::put_json("/api/users/me", patch).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = patch;
        Err(ApiError::Request)
    }
}

/// Change the current user's password.
pub async fn update_password(current: &str, new: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::PasswordChange {
            current_password: current.to_owned(),
            new_password: new.to_owned(),
        };
        web::put_unit("/api/users/me/password", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new);
        Err(ApiError::Request)
    }
}

/// Search doctors, optionally filtered by name or speciality.
pub async fn fetch_doctors(query: &str) -> Result<Vec<DoctorSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        if query.is_empty() {
            web::get_json("/api/doctors").await
        } else {
            let encoded = String::from(js_sys::encode_uri_component(query));
            web::get_json(&format!("/api/doctors?search={encoded}")).await
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Request)
    }
}

/// Doctors the current patient follows.
pub async fn fetch_followed_doctors() -> Result<Vec<DoctorSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::get_json("/api/doctors/followed").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Request)
    }
}

/// Follow a doctor.
pub async fn follow_doctor(doctor_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::post_unit(&format!("/api/doctors/{doctor_id}/follow"), &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = doctor_id;
        Err(ApiError::Request)
    }
}

/// Unfollow a doctor.
pub async fn unfollow_doctor(doctor_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::delete_unit(&format!("/api/doctors/{doctor_id}/follow")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = doctor_id;
        Err(ApiError::Request)
    }
}

/// List the current user's conversations.
pub async fn fetch_conversations() -> Result<Vec<Conversation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::get_json("/api/conversations").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Request)
    }
}

/// Messages within one conversation.
pub async fn fetch_messages(conversation_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::get_json(&format!("/api/conversations/{conversation_id}/messages")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = conversation_id;
        Err(ApiError::Request)
    }
}

/// Send a message into a conversation. Returns the stored message.
pub async fn send_message(conversation_id: &str, content: &str) -> Result<ChatMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::post_json(
            &format!("/api/conversations/{conversation_id}/messages"),
            &serde_json::json!({ "content": content }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, content);
        Err(ApiError::Request)
    }
}

/// Submit an uploaded image URL for disease detection.
pub async fn submit_detection(image_url: &str) -> Result<DetectionResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::post_json("/api/detect", &serde_json::json!({ "imageUrl": image_url })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_url;
        Err(ApiError::Request)
    }
}

/// Aggregate counters for the admin dashboard.
pub async fn fetch_admin_stats() -> Result<AdminStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::get_json("/api/admin/stats").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Request)
    }
}

/// Full user list for the admin dashboard.
pub async fn fetch_admin_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::get_json("/api/admin/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Request)
    }
}

/// Approve or reject a doctor profile.
pub async fn set_doctor_approval(
    doctor_id: &str,
    status: ApprovalStatus,
) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        web::put_json(
            &format!("/api/admin/doctors/{doctor_id}/approval"),
            &serde_json::json!({ "approvalStatus": status }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (doctor_id, status);
        Err(ApiError::Request)
    }
}
