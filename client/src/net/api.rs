//! REST API helpers for communicating with the clinical backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since the clinical API is
//! only reachable from the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration. Backend error bodies carry
//! a `message` field which is returned verbatim so pages can show exactly
//! what the server said. Data fetches issued without a stored credential
//! resolve to an empty result: "not signed in" is a state, not an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AssessmentRecord, CreateAssessmentRequest, LoginResponse, NewPatient, Patient, UserInfo,
};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, OtpRequest, UploadResponse, UploadedImage};

/// Default origin of the clinical API deployment.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Storage key for a per-browser API origin override.
#[cfg(feature = "hydrate")]
const API_BASE_OVERRIDE_KEY: &str = "woundtrack_api_base";

#[cfg(any(test, feature = "hydrate"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn patient_endpoint(patient_id: i64) -> String {
    format!("/api/patients/{patient_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn assessment_delete_endpoint(assessment_id: i64) -> String {
    format!("/api/images/assessments/{assessment_id}/delete/")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_status_message(status: u16) -> String {
    format!("request failed with HTTP {status}")
}

/// Resolve the API origin: per-browser override first, then the default.
#[cfg(feature = "hydrate")]
fn api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_OVERRIDE_KEY).ok().flatten());
    match stored {
        Some(base) if !base.trim().is_empty() => base,
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// Extract the backend's error message, falling back to the HTTP status.
#[cfg(feature = "hydrate")]
async fn error_body_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<super::types::ApiMessage>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => http_status_message(status),
    }
}

/// First login step: exchange credentials for tokens or an OTP challenge.
///
/// # Errors
///
/// Returns the backend's message when the credentials are rejected, or a
/// transport error description when the request itself fails.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&api_url("/api/auth/login/"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Second login step: verify the one-time code and receive tokens.
///
/// # Errors
///
/// Returns the backend's message when the code is rejected.
pub async fn verify_otp(username: &str, otp: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = OtpRequest {
            username: username.to_owned(),
            otp: otp.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&api_url("/api/auth/verify-otp/"))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, otp);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated clinician from `/api/auth/me/`.
/// Returns `None` if the token is missing or rejected, or on the server.
pub async fn fetch_me(token: Option<&str>) -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let token = token?;
        let resp = gloo_net::http::Request::get(&api_url("/api/auth/me/"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Notify the backend that this session is over. Failures are ignored; the
/// local session is discarded regardless.
pub async fn logout(token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else { return };
        let _ = gloo_net::http::Request::post(&api_url("/api/auth/logout/"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Upload one wound image as `multipart/form-data`.
///
/// # Errors
///
/// Returns the backend's validation message, or a transport error, when the
/// upload does not complete. Each call is independent; callers run one task
/// per file.
#[cfg(feature = "hydrate")]
pub async fn upload_image(
    token: Option<&str>,
    file: &web_sys::File,
    description: &str,
) -> Result<UploadedImage, String> {
    let Some(token) = token else {
        return Err("Not signed in.".to_owned());
    };
    let form = web_sys::FormData::new().map_err(|_| "could not build upload form".to_owned())?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|_| "could not attach image data".to_owned())?;
    form.append_with_str("description", description)
        .map_err(|_| "could not attach image description".to_owned())?;

    let resp = gloo_net::http::Request::post(&api_url("/api/images/upload/"))
        .header("Authorization", &bearer_header(token))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_body_message(resp).await);
    }
    let body: UploadResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.data)
}

/// Fetch all assessments visible to this clinician.
///
/// Resolves to an empty list without a credential so logged-out views render
/// cleanly. Ordering is applied by the caller.
///
/// # Errors
///
/// Returns the backend's message or a transport error description.
pub async fn fetch_assessments(token: Option<&str>) -> Result<Vec<AssessmentRecord>, String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return Ok(Vec::new());
        };
        let resp = gloo_net::http::Request::get(&api_url("/api/images/assessments/"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        resp.json::<Vec<AssessmentRecord>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Ok(Vec::new())
    }
}

/// File a new assessment linking previously uploaded images.
///
/// # Errors
///
/// Returns the backend's message verbatim so the draft page can display it
/// and keep the user's input intact.
pub async fn create_assessment(
    token: Option<&str>,
    request: &CreateAssessmentRequest,
) -> Result<AssessmentRecord, String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return Err("Not signed in.".to_owned());
        };
        let resp = gloo_net::http::Request::post(&api_url("/api/images/assessments/create/"))
            .header("Authorization", &bearer_header(token))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        resp.json::<AssessmentRecord>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err("not available on server".to_owned())
    }
}

/// Delete one assessment record.
///
/// # Errors
///
/// Returns the backend's message or a transport error description.
pub async fn delete_assessment(token: Option<&str>, assessment_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return Err("Not signed in.".to_owned());
        };
        let resp = gloo_net::http::Request::delete(&api_url(&assessment_delete_endpoint(
            assessment_id,
        )))
        .header("Authorization", &bearer_header(token))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, assessment_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the patients directory.
///
/// Resolves to an empty list without a credential.
///
/// # Errors
///
/// Returns the backend's message or a transport error description.
pub async fn fetch_patients(token: Option<&str>) -> Result<Vec<Patient>, String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return Ok(Vec::new());
        };
        let resp = gloo_net::http::Request::get(&api_url("/api/patients/list/"))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        resp.json::<Vec<Patient>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Ok(Vec::new())
    }
}

/// Fetch one patient's profile. Returns `None` when missing, unauthorized,
/// or on the server.
pub async fn fetch_patient(token: Option<&str>, patient_id: i64) -> Option<Patient> {
    #[cfg(feature = "hydrate")]
    {
        let token = token?;
        let resp = gloo_net::http::Request::get(&api_url(&patient_endpoint(patient_id)))
            .header("Authorization", &bearer_header(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Patient>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, patient_id);
        None
    }
}

/// Register a new patient.
///
/// # Errors
///
/// Returns the backend's message (e.g. duplicate MRN) or a transport error.
pub async fn add_patient(token: Option<&str>, patient: &NewPatient) -> Result<Patient, String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = token else {
            return Err("Not signed in.".to_owned());
        };
        let resp = gloo_net::http::Request::post(&api_url("/api/patients/add/"))
            .header("Authorization", &bearer_header(token))
            .json(patient)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_body_message(resp).await);
        }
        resp.json::<Patient>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, patient);
        Err("not available on server".to_owned())
    }
}
