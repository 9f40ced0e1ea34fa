//! Image/PDF upload to the external media host.
//!
//! Uploads use an unsigned preset. Deployments have shipped with different
//! preset names over time, so the client walks a documented fallback sequence
//! until one succeeds. The request is multipart `FormData` with no explicit
//! content-type (the browser computes the boundary) and uses the extended
//! upload timeout.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;

/// Unsigned upload presets, tried in order.
pub const UPLOAD_PRESETS: &[&str] = &["medilink_uploads", "medilink_media", "ml_default"];

/// Media-host upload endpoint. Overridable at build time.
pub fn upload_endpoint() -> &'static str {
    option_env!("MEDILINK_UPLOAD_URL")
        .unwrap_or("https://api.cloudinary.com/v1_1/medilink/auto/upload")
}

/// Pull the durable content URL out of an upload response body.
///
/// The host returns `secure_url` on current API versions and plain `url` on
/// older ones; prefer the secure variant.
pub fn extract_upload_url(body: &serde_json::Value) -> Option<String> {
    body.get("secure_url")
        .or_else(|| body.get("url"))
        .and_then(|v| v.as_str())
        .map(ToOwned::to_owned)
}

/// Upload a file, walking the preset fallback sequence.
///
/// Returns the durable content URL from the first preset that accepts the
/// upload; all-presets-failed surfaces as a network-class error.
#[cfg(feature = "hydrate")]
pub async fn upload_file(file: &web_sys::File) -> Result<String, ApiError> {
    for preset in UPLOAD_PRESETS {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Request)?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Request)?;
        form.append_with_str("upload_preset", preset)
            .map_err(|_| ApiError::Request)?;

        // No explicit content-type: the browser must set the multipart boundary.
        let request = gloo_net::http::Request::post(upload_endpoint())
            .body(form)
            .map_err(|_| ApiError::Request)?;

        let response = match send_upload(request).await {
            Ok(r) => r,
            Err(e) => {
                leptos::logging::warn!("upload preset {preset} failed: {e}");
                continue;
            }
        };

        if response.ok() {
            let body = response
                .json::<serde_json::Value>()
                .await
                .map_err(|_| ApiError::Request)?;
            if let Some(url) = extract_upload_url(&body) {
                return Ok(url);
            }
        } else {
            leptos::logging::warn!(
                "upload preset {preset} rejected with status {}",
                response.status()
            );
        }
    }

    Err(ApiError::Network)
}

#[cfg(feature = "hydrate")]
async fn send_upload(
    request: gloo_net::http::Request,
) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let send = Box::pin(request.send());
    let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(
        crate::net::api::UPLOAD_TIMEOUT_MS,
    ));

    match select(send, timeout).await {
        Either::Left((result, _)) => result.map_err(|_| ApiError::Network),
        Either::Right(((), _)) => Err(ApiError::Network),
    }
}
