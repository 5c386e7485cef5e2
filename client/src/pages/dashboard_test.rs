use super::*;

fn patient(risk: &str) -> Patient {
    Patient {
        id: 1,
        name: "James Wilson".to_owned(),
        mrn: "MRN-8821".to_owned(),
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
        risk_level: risk.to_owned(),
        active_wounds: 0,
        updated_at: None,
    }
}

fn record(date: &str) -> AssessmentRecord {
    AssessmentRecord {
        id: 1,
        patient_id: "MRN-8821".to_owned(),
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

#[test]
fn stats_from_empty_data_are_zero() {
    let stats = derive_stats(&[], &[]);
    assert_eq!(stats, DashboardStats::default());
    assert_eq!(stats.latest_assessment, None);
}

#[test]
fn stats_count_patients_and_risk() {
    let patients = vec![patient("High"), patient("Low"), patient("high")];
    let stats = derive_stats(&patients, &[]);
    assert_eq!(stats.active_patients, 3);
    assert_eq!(stats.high_risk, 2);
}

#[test]
fn latest_assessment_uses_newest_date() {
    let records = vec![
        record("2023-10-10T05:30:00Z"),
        record("2023-10-24T05:30:00Z"),
        record("2023-10-22T05:30:00Z"),
    ];
    let stats = derive_stats(&[], &records);
    assert_eq!(stats.total_assessments, 3);
    assert_eq!(stats.latest_assessment.as_deref(), Some("Oct 24, 2023"));
}
