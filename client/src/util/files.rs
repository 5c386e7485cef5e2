//! Image file validation and preview object-URL management.
//!
//! DESIGN
//! ======
//! Validation is pure so the size/type rules are unit-testable; only the
//! object-URL helpers touch the browser. Previews are plain `blob:` URLs and
//! must be revoked by whoever drops a tracked image; nothing here defers
//! cleanup.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Upper size limit for a wound photo, matching the backend validator.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types the backend accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Check one selected file against the size and format rules.
///
/// The browser reports sizes as `f64`; fractional byte counts do not occur
/// for real files, so the value is compared directly against the limit.
///
/// # Errors
///
/// Returns the user-facing rejection message; a rejected file is reported
/// and never tracked.
pub fn validate_file(name: &str, size_bytes: f64, mime: &str) -> Result<(), String> {
    if size_bytes > max_image_bytes_f64() {
        return Err(format!("{name} is too large. The limit is 10 MB."));
    }
    if !ACCEPTED_MIME_TYPES.contains(&mime) {
        return Err(format!(
            "{name} has an unsupported format. Only PNG and JPG images are allowed."
        ));
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn max_image_bytes_f64() -> f64 {
    MAX_IMAGE_BYTES as f64
}

/// Create a local object URL for previewing a selected file.
/// Returns `None` on the server or if the browser refuses.
#[cfg(feature = "hydrate")]
pub fn create_preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Release a preview object URL. Safe to call with an already-revoked URL.
pub fn revoke_preview_url(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
