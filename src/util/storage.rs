//! Persistent client-side slots backed by `localStorage`.
//!
//! Two values survive reloads: the bearer token (the sole key for session
//! rehydration) and a best-effort profile-image backup used to patch server
//! responses that drop the field. Neither has an expiry; the token is cleared
//! on logout/auth failure and the backup is only ever overwritten by a fresh
//! server value. Requires a browser environment; native builds read nothing.

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "medilink_token";
#[cfg(feature = "hydrate")]
const IMAGE_BACKUP_KEY: &str = "medilink_profile_image";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Read the profile-image backup slot.
pub fn read_image_backup() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(IMAGE_BACKUP_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Overwrite the profile-image backup slot.
pub fn write_image_backup(image_url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(IMAGE_BACKUP_KEY, image_url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image_url;
    }
}
