#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::CreateAssessmentRequest;
use crate::state::uploads::UploadTracker;

/// Wound classification options offered by the assessment form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WoundType {
    #[default]
    PressureInjury,
    DiabeticUlcer,
    SurgicalWound,
    Other,
}

impl WoundType {
    /// Backend value for this classification.
    pub fn value(self) -> &'static str {
        match self {
            Self::PressureInjury => "pressure_injury",
            Self::DiabeticUlcer => "diabetic_ulcer",
            Self::SurgicalWound => "surgical_wound",
            Self::Other => "other",
        }
    }

    /// Human-readable label for form controls.
    pub fn label(self) -> &'static str {
        match self {
            Self::PressureInjury => "Pressure Injury",
            Self::DiabeticUlcer => "Diabetic Ulcer",
            Self::SurgicalWound => "Surgical Wound",
            Self::Other => "Other",
        }
    }

    /// Parse a backend/form value; unknown values map to `Other`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "pressure_injury" => Self::PressureInjury,
            "diabetic_ulcer" => Self::DiabeticUlcer,
            "surgical_wound" => Self::SurgicalWound,
            _ => Self::Other,
        }
    }

    /// All options in form order.
    pub fn all() -> [Self; 4] {
        [
            Self::PressureInjury,
            Self::DiabeticUlcer,
            Self::SurgicalWound,
            Self::Other,
        ]
    }
}

/// Exudate amount options offered by the assessment form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExudateAmount {
    None,
    #[default]
    Low,
    Moderate,
    High,
}

impl ExudateAmount {
    /// Backend value for this amount.
    pub fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    /// Human-readable label for form controls.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Parse a backend/form value; unknown values map to `Low`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "moderate" => Self::Moderate,
            "high" => Self::High,
            _ => Self::Low,
        }
    }

    /// All options in form order.
    pub fn all() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::High, Self::None]
    }
}

/// Wound dimensions in centimeters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurements {
    pub length: f64,
    pub width: f64,
    pub depth: f64,
}

/// Submission lifecycle of the draft.
///
/// `Editing → Submitting → {Done | Editing + error}`. There is no
/// cancellation once the request is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Done,
}

/// Reason a draft cannot be submitted, checked in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    /// No image is attached.
    NoImages,
    /// At least one image upload is still in flight.
    UploadsInFlight,
    /// At least one image upload failed.
    FailedUploads,
    /// The draft has no patient reference.
    MissingPatient,
}

impl SubmitBlock {
    /// User-facing explanation shown on the draft page.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::NoImages => "Add at least one wound image before submitting.",
            Self::UploadsInFlight => "Wait for image uploads to finish before submitting.",
            Self::FailedUploads => "Remove failed uploads before submitting.",
            Self::MissingPatient => "No patient is attached to this assessment.",
        }
    }
}

/// An in-progress wound assessment: clinical form fields plus the patient it
/// is filed under. Image state lives in the [`UploadTracker`]; the two meet
/// only at submission time.
#[derive(Clone, Debug, PartialEq)]
pub struct AssessmentDraft {
    /// Medical record number the assessment is filed under.
    pub patient_mrn: String,
    /// Backend patient row, when the draft was opened from a profile.
    pub patient_id: Option<i64>,
    /// Wound classification.
    pub wound_type: WoundType,
    /// Wound stage 1–4.
    pub stage: u8,
    /// Exudate amount.
    pub exudate: ExudateAmount,
    /// Reported pain level 0–10.
    pub pain_level: u8,
    /// Anatomical wound location.
    pub location: String,
    /// Wound onset date, ISO 8601 date.
    pub onset_date: String,
    /// Wound dimensions.
    pub measurements: Measurements,
    /// Clinical notes.
    pub notes: String,
    /// Submission lifecycle state.
    pub phase: SubmitPhase,
    /// Last submission error, preserved together with all field values so
    /// the user can retry without re-entering anything.
    pub error: Option<String>,
}

impl Default for AssessmentDraft {
    fn default() -> Self {
        Self {
            patient_mrn: String::new(),
            patient_id: None,
            wound_type: WoundType::default(),
            stage: 1,
            exudate: ExudateAmount::default(),
            pain_level: 4,
            location: String::new(),
            onset_date: String::new(),
            measurements: Measurements::default(),
            notes: String::new(),
            phase: SubmitPhase::default(),
            error: None,
        }
    }
}

impl AssessmentDraft {
    /// Fresh draft filed under a known patient.
    pub fn for_patient(mrn: &str, patient_id: i64) -> Self {
        Self {
            patient_mrn: mrn.to_owned(),
            patient_id: Some(patient_id),
            ..Self::default()
        }
    }

    /// Fill in the patient reference after the fact (e.g. when the profile
    /// loads following a page reload). Does nothing once a patient is set.
    pub fn ensure_patient(&mut self, mrn: &str, patient_id: i64) {
        if self.patient_id.is_none() {
            self.patient_id = Some(patient_id);
            self.patient_mrn = mrn.to_owned();
        }
    }

    /// First reason this draft cannot be submitted, if any.
    ///
    /// Checks run in a fixed order so the user always sees the most
    /// fundamental problem first: no images, uploads in flight, failed
    /// uploads, missing patient.
    pub fn submit_block(&self, uploads: &UploadTracker) -> Option<SubmitBlock> {
        if uploads.is_empty() {
            return Some(SubmitBlock::NoImages);
        }
        if uploads.has_uploading() {
            return Some(SubmitBlock::UploadsInFlight);
        }
        if uploads.has_failed() {
            return Some(SubmitBlock::FailedUploads);
        }
        if self.patient_mrn.trim().is_empty() {
            return Some(SubmitBlock::MissingPatient);
        }
        None
    }

    /// Build the submission payload, or report why one cannot exist yet.
    ///
    /// An invalid draft never yields a request value, so "no network call on
    /// a blocked submit" holds by construction.
    pub fn prepare_request(
        &self,
        uploads: &UploadTracker,
    ) -> Result<CreateAssessmentRequest, SubmitBlock> {
        if let Some(block) = self.submit_block(uploads) {
            return Err(block);
        }
        Ok(CreateAssessmentRequest {
            patient_id: self.patient_mrn.trim().to_owned(),
            related_patient: self.patient_id,
            notes: self.notes.clone(),
            image_ids: uploads.ready_ids(),
            wound_type: self.wound_type.value().to_owned(),
            stage: self.stage,
            exudate: self.exudate.value().to_owned(),
            length: self.measurements.length,
            width: self.measurements.width,
            depth: self.measurements.depth,
            pain_level: self.pain_level,
            location: self.location.clone(),
            onset_date: self.onset_date.clone(),
        })
    }

    /// Enter `Submitting`. Ignored unless currently `Editing`.
    pub fn begin_submit(&mut self) {
        if self.phase == SubmitPhase::Editing {
            self.phase = SubmitPhase::Submitting;
            self.error = None;
        }
    }

    /// Record a server rejection: back to `Editing` with the message,
    /// everything else untouched.
    pub fn fail_submit(&mut self, message: String) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Editing;
            self.error = Some(message);
        }
    }

    /// Record a successful submission.
    pub fn complete_submit(&mut self) {
        if self.phase == SubmitPhase::Submitting {
            self.phase = SubmitPhase::Done;
        }
    }
}

/// Pain descriptor shown next to the slider value.
pub fn pain_descriptor(level: u8) -> &'static str {
    match level {
        0 => "No Pain",
        1..=3 => "Mild",
        4..=6 => "Moderate",
        7..=9 => "Severe",
        _ => "Worst Possible",
    }
}
