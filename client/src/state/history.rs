#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::{AssessmentRecord, Patient};

/// Invalidation counter for assessment listings.
///
/// Pages fetch assessments through a `LocalResource` that tracks this value;
/// mutations (submit, delete) bump it to trigger a refetch everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HistoryEpoch(pub u32);

impl HistoryEpoch {
    /// Invalidate all assessment listings.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Sort records newest-first. The backend timestamps are ISO 8601, so a
/// lexicographic comparison orders them correctly.
pub fn sort_date_desc(mut records: Vec<AssessmentRecord>) -> Vec<AssessmentRecord> {
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Assessments belonging to one patient, matched by MRN or by the linked
/// patient row (older records only carry one of the two).
pub fn for_patient(records: &[AssessmentRecord], patient: &Patient) -> Vec<AssessmentRecord> {
    records
        .iter()
        .filter(|r| r.patient_id == patient.mrn || r.related_patient == Some(patient.id))
        .cloned()
        .collect()
}

/// Case-insensitive search across patient reference and wound fields.
pub fn filter_assessments(records: &[AssessmentRecord], query: &str) -> Vec<AssessmentRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            r.patient_id.to_lowercase().contains(&needle)
                || r.location
                    .as_deref()
                    .is_some_and(|loc| loc.to_lowercase().contains(&needle))
                || r.wound_type
                    .as_deref()
                    .is_some_and(|wt| wt.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Wound surface area in cm², when both dimensions are recorded.
pub fn wound_area(record: &AssessmentRecord) -> Option<f64> {
    match (record.length, record.width) {
        (Some(length), Some(width)) => Some(length * width),
        _ => None,
    }
}

/// Area formatted for cards and tables, `"-- cm²"` when unknown.
pub fn format_area(record: &AssessmentRecord) -> String {
    match wound_area(record) {
        Some(area) => format!("{area:.1} cm²"),
        None => "-- cm²".to_owned(),
    }
}

/// Uppercased human form of a wound type value, e.g.
/// `"pressure_injury"` → `"PRESSURE INJURY"`.
pub fn wound_type_display(record: &AssessmentRecord) -> String {
    match record.wound_type.as_deref() {
        Some(value) if !value.is_empty() => value.replace('_', " ").to_uppercase(),
        _ => "WOUND ASSESSMENT".to_owned(),
    }
}

/// Stage badge text, defaulting to stage 1 when unrecorded.
pub fn stage_display(record: &AssessmentRecord) -> String {
    format!("Stage {}", record.stage.unwrap_or(1))
}

/// First preview image URL attached to a record, if any.
pub fn first_image_url(record: &AssessmentRecord) -> Option<&str> {
    record
        .image_details
        .iter()
        .find_map(|d| d.image_url.as_deref())
}

/// Shortened notes for list rows; full notes stay on the record.
pub fn notes_excerpt(notes: &str) -> String {
    const LIMIT: usize = 30;
    let trimmed = notes.trim();
    if trimmed.is_empty() {
        return "No notes provided.".to_owned();
    }
    if trimmed.chars().count() <= LIMIT {
        return trimmed.to_owned();
    }
    let cut: String = trimmed.chars().take(LIMIT).collect();
    format!("{cut}...")
}
