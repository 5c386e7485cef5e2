//! Wire-schema DTOs for the clinical API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. The backend serializes decimal measurements either as numbers or
//! as quoted strings depending on the field type, so the numeric fields use
//! lenient deserializers instead of trusting one representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated clinician as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Backend user identifier.
    pub id: i64,
    /// Login name (email or hospital id).
    pub username: String,
    /// Contact email, if set.
    #[serde(default)]
    pub email: Option<String>,
    /// Given name, if set.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name, if set.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserInfo {
    /// Best display name available: full name if present, else the username.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{first} {last}")
            }
            (Some(first), _) if !first.is_empty() => first.to_owned(),
            _ => self.username.clone(),
        }
    }
}

/// Access/refresh token pair issued at login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer token sent on every API call.
    pub access: String,
    /// Long-lived token for obtaining a new access token.
    pub refresh: String,
}

/// Credentials for the first login step.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    /// Email or hospital id.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Second-factor verification payload.
#[derive(Clone, Debug, Serialize)]
pub struct OtpRequest {
    /// Email or hospital id from the first step.
    pub username: String,
    /// One-time code delivered out of band.
    pub otp: String,
}

/// Response from `/api/auth/login/` and `/api/auth/verify-otp/`.
///
/// The backend either issues tokens immediately or asks for a second factor;
/// both shapes arrive as this one DTO.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable status line.
    #[serde(default)]
    pub message: String,
    /// Set when the account requires a one-time code to finish signing in.
    #[serde(default)]
    pub otp_required: bool,
    /// The signed-in clinician, present once authentication completes.
    #[serde(default)]
    pub user: Option<UserInfo>,
    /// Token pair, present once authentication completes.
    #[serde(default)]
    pub tokens: Option<TokenPair>,
}

/// Interpreted outcome of a login-flow response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Fully authenticated: tokens and user identity are available.
    LoggedIn { user: UserInfo, tokens: TokenPair },
    /// The backend demands a one-time code before issuing tokens.
    OtpRequired,
    /// The response carried neither tokens nor an OTP challenge.
    Rejected(String),
}

impl LoginResponse {
    /// Collapse the response into the three outcomes the login page handles.
    pub fn outcome(self) -> LoginOutcome {
        if self.otp_required {
            return LoginOutcome::OtpRequired;
        }
        match (self.user, self.tokens) {
            (Some(user), Some(tokens)) => LoginOutcome::LoggedIn { user, tokens },
            _ => LoginOutcome::Rejected(self.message),
        }
    }
}

/// Generic `{message}` body used by the backend for status and error replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable status or error text.
    #[serde(default)]
    pub message: String,
}

/// A stored wound image as returned by the upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Server-assigned image identifier.
    pub id: i64,
    /// Absolute URL of the stored image, if resolvable.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Free-text description supplied at upload (usually the filename).
    #[serde(default)]
    pub description: Option<String>,
    /// Upload timestamp, ISO 8601.
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Envelope returned by `POST /api/images/upload/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Human-readable status line.
    #[serde(default)]
    pub message: String,
    /// The stored image record.
    pub data: UploadedImage,
}

/// Nested image reference inside an assessment record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetail {
    /// Server-assigned image identifier.
    pub id: i64,
    /// Absolute URL of the stored image, if resolvable.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A filed wound assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Server-assigned assessment identifier.
    pub id: i64,
    /// Medical record number the assessment was filed under.
    #[serde(default)]
    pub patient_id: String,
    /// Backend patient row this assessment links to, if resolved.
    #[serde(default)]
    pub related_patient: Option<i64>,
    /// Filing timestamp, ISO 8601.
    #[serde(default)]
    pub date: String,
    /// Clinical notes.
    #[serde(default)]
    pub notes: String,
    /// Wound classification value (e.g. `"pressure_injury"`).
    #[serde(default)]
    pub wound_type: Option<String>,
    /// Wound stage 1–4.
    #[serde(default, deserialize_with = "deserialize_opt_u8_lenient")]
    pub stage: Option<u8>,
    /// Exudate amount value (e.g. `"low"`).
    #[serde(default)]
    pub exudate: Option<String>,
    /// Wound length in centimeters.
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub length: Option<f64>,
    /// Wound width in centimeters.
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub width: Option<f64>,
    /// Wound depth in centimeters.
    #[serde(default, deserialize_with = "deserialize_opt_f64_lenient")]
    pub depth: Option<f64>,
    /// Reported pain level 0–10.
    #[serde(default, deserialize_with = "deserialize_opt_u8_lenient")]
    pub pain_level: Option<u8>,
    /// Anatomical wound location.
    #[serde(default)]
    pub location: Option<String>,
    /// Wound onset date, ISO 8601 date.
    #[serde(default)]
    pub onset_date: Option<String>,
    /// Stored images attached to this assessment.
    #[serde(default)]
    pub image_details: Vec<ImageDetail>,
}

/// Payload for `POST /api/images/assessments/create/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateAssessmentRequest {
    /// Medical record number to file under.
    pub patient_id: String,
    /// Backend patient row to link, when known.
    pub related_patient: Option<i64>,
    /// Clinical notes.
    pub notes: String,
    /// Server ids of already-uploaded images, in display order.
    pub image_ids: Vec<i64>,
    /// Wound classification value.
    pub wound_type: String,
    /// Wound stage 1–4.
    pub stage: u8,
    /// Exudate amount value.
    pub exudate: String,
    /// Wound length in centimeters.
    pub length: f64,
    /// Wound width in centimeters.
    pub width: f64,
    /// Wound depth in centimeters.
    pub depth: f64,
    /// Reported pain level 0–10.
    pub pain_level: u8,
    /// Anatomical wound location.
    pub location: String,
    /// Wound onset date, ISO 8601 date.
    pub onset_date: String,
}

/// A patient record from the patients directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Backend patient identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Medical record number.
    pub mrn: String,
    /// Date of birth, ISO 8601 date.
    #[serde(default)]
    pub dob: Option<String>,
    /// Gender, if recorded.
    #[serde(default)]
    pub gender: Option<String>,
    /// Blood group, if recorded.
    #[serde(default)]
    pub blood_group: Option<String>,
    /// Assigned bed, if any.
    #[serde(default)]
    pub bed_number: Option<String>,
    /// Assigned ward, if any.
    #[serde(default)]
    pub ward: Option<String>,
    /// Admission date, ISO 8601 date.
    #[serde(default)]
    pub admission_date: Option<String>,
    /// Primary diagnosis text.
    #[serde(default)]
    pub diagnosis: Option<String>,
    /// Attending physician name.
    #[serde(default)]
    pub assigning_physician: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Home address.
    #[serde(default)]
    pub address: Option<String>,
    /// Emergency contact name.
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    /// Emergency contact phone number.
    #[serde(default)]
    pub emergency_contact_number: Option<String>,
    /// Risk classification: `"High"`, `"Moderate"`, or `"Low"`.
    #[serde(default = "default_risk_level")]
    pub risk_level: String,
    /// Count of assessments filed against this patient.
    #[serde(default)]
    pub active_wounds: i64,
    /// Last record update, ISO 8601.
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_risk_level() -> String {
    "Low".to_owned()
}

/// Payload for `POST /api/patients/add/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    /// Full name.
    pub name: String,
    /// Medical record number; must be unique backend-side.
    pub mrn: String,
    /// Date of birth, ISO 8601 date.
    pub dob: String,
    /// Gender, free text.
    pub gender: String,
    /// Blood group, free text.
    pub blood_group: String,
    /// Assigned bed.
    pub bed_number: String,
    /// Assigned ward.
    pub ward: String,
    /// Admission date, ISO 8601 date.
    pub admission_date: String,
    /// Primary diagnosis text.
    pub diagnosis: String,
    /// Attending physician name.
    pub assigning_physician: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Home address.
    pub address: String,
    /// Emergency contact name.
    pub emergency_contact_name: String,
    /// Emergency contact phone number.
    pub emergency_contact_number: String,
}

fn deserialize_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => Ok(number.as_f64()),
        serde_json::Value::String(text) => {
            if text.trim().is_empty() {
                return Ok(None);
            }
            text.trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("not a numeric string: {text:?}")))
        }
        _ => Err(D::Error::custom("expected number, numeric string, or null")),
    }
}

fn deserialize_opt_u8_lenient<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_opt_f64_lenient(deserializer)?;
    match value {
        None => Ok(None),
        Some(float) if float.fract() == 0.0 && (0.0..=255.0).contains(&float) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok(Some(float as u8))
        }
        Some(float) => Err(D::Error::custom(format!("value {float} out of range for u8"))),
    }
}
