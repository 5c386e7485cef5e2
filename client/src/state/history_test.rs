use super::*;
use crate::net::types::ImageDetail;

fn record(id: i64, patient_id: &str, date: &str) -> AssessmentRecord {
    AssessmentRecord {
        id,
        patient_id: patient_id.to_owned(),
        related_patient: None,
        date: date.to_owned(),
        notes: String::new(),
        wound_type: None,
        stage: None,
        exudate: None,
        length: None,
        width: None,
        depth: None,
        pain_level: None,
        location: None,
        onset_date: None,
        image_details: Vec::new(),
    }
}

fn patient(id: i64, mrn: &str) -> Patient {
    Patient {
        id,
        name: "James Wilson".to_owned(),
        mrn: mrn.to_owned(),
        dob: None,
        gender: None,
        blood_group: None,
        bed_number: None,
        ward: None,
        admission_date: None,
        diagnosis: None,
        assigning_physician: None,
        contact_number: None,
        address: None,
        emergency_contact_name: None,
        emergency_contact_number: None,
        risk_level: "Low".to_owned(),
        active_wounds: 0,
        updated_at: None,
    }
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn sort_date_desc_puts_newest_first() {
    let records = vec![
        record(1, "MRN-1", "2023-10-10T05:30:00Z"),
        record(2, "MRN-1", "2023-10-24T05:30:00Z"),
        record(3, "MRN-1", "2023-10-22T05:30:00Z"),
    ];
    let sorted = sort_date_desc(records);
    let ids: Vec<i64> = sorted.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

// =============================================================
// Per-patient filtering
// =============================================================

#[test]
fn for_patient_matches_by_mrn_or_linked_row() {
    let target = patient(12, "MRN-8821");
    let mut linked = record(2, "legacy-reference", "2023-10-01T00:00:00Z");
    linked.related_patient = Some(12);
    let records = vec![
        record(1, "MRN-8821", "2023-10-02T00:00:00Z"),
        linked,
        record(3, "MRN-9932", "2023-10-03T00:00:00Z"),
    ];

    let matched = for_patient(&records, &target);
    let ids: Vec<i64> = matched.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

// =============================================================
// Search
// =============================================================

#[test]
fn filter_assessments_matches_mrn_location_and_type() {
    let mut a = record(1, "MRN-8821", "2023-10-02T00:00:00Z");
    a.location = Some("Right Heel".to_owned());
    let mut b = record(2, "MRN-9932", "2023-10-03T00:00:00Z");
    b.wound_type = Some("venous_ulcer".to_owned());
    let records = vec![a, b];

    assert_eq!(filter_assessments(&records, "8821").len(), 1);
    assert_eq!(filter_assessments(&records, "heel").len(), 1);
    assert_eq!(filter_assessments(&records, "VENOUS").len(), 1);
    assert_eq!(filter_assessments(&records, "").len(), 2);
    assert!(filter_assessments(&records, "sacrum").is_empty());
}

// =============================================================
// Derived display values
// =============================================================

#[test]
fn wound_area_needs_both_dimensions() {
    let mut r = record(1, "MRN-1", "2023-10-02T00:00:00Z");
    assert_eq!(wound_area(&r), None);
    assert_eq!(format_area(&r), "-- cm²");

    r.length = Some(4.2);
    assert_eq!(wound_area(&r), None);

    r.width = Some(2.0);
    assert_eq!(wound_area(&r), Some(8.4));
    assert_eq!(format_area(&r), "8.4 cm²");
}

#[test]
fn wound_type_display_humanizes_value() {
    let mut r = record(1, "MRN-1", "2023-10-02T00:00:00Z");
    assert_eq!(wound_type_display(&r), "WOUND ASSESSMENT");
    r.wound_type = Some("pressure_injury".to_owned());
    assert_eq!(wound_type_display(&r), "PRESSURE INJURY");
}

#[test]
fn stage_display_defaults_to_one() {
    let mut r = record(1, "MRN-1", "2023-10-02T00:00:00Z");
    assert_eq!(stage_display(&r), "Stage 1");
    r.stage = Some(3);
    assert_eq!(stage_display(&r), "Stage 3");
}

#[test]
fn first_image_url_skips_entries_without_urls() {
    let mut r = record(1, "MRN-1", "2023-10-02T00:00:00Z");
    r.image_details = vec![
        ImageDetail {
            id: 1,
            image_url: None,
        },
        ImageDetail {
            id: 2,
            image_url: Some("https://cdn/wounds/2.jpg".to_owned()),
        },
    ];
    assert_eq!(first_image_url(&r), Some("https://cdn/wounds/2.jpg"));
}

#[test]
fn notes_excerpt_shortens_long_notes() {
    assert_eq!(notes_excerpt(""), "No notes provided.");
    assert_eq!(notes_excerpt("Short note"), "Short note");
    let long = "Granulation tissue forming across the distal wound edge";
    let excerpt = notes_excerpt(long);
    assert!(excerpt.ends_with("..."));
    assert_eq!(excerpt.chars().count(), 33);
}

// =============================================================
// Epoch
// =============================================================

#[test]
fn epoch_bump_changes_value_and_wraps() {
    let mut epoch = HistoryEpoch::default();
    epoch.bump();
    assert_eq!(epoch.0, 1);

    let mut max = HistoryEpoch(u32::MAX);
    max.bump();
    assert_eq!(max.0, 0);
}
