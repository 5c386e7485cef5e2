use super::*;

// =============================================================
// LoginResponse::outcome
// =============================================================

#[test]
fn login_outcome_with_tokens_is_logged_in() {
    let json = r#"{
        "message": "Login successful",
        "user": {"id": 7, "username": "nurse@example.com"},
        "tokens": {"access": "acc", "refresh": "ref"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    match resp.outcome() {
        LoginOutcome::LoggedIn { user, tokens } => {
            assert_eq!(user.id, 7);
            assert_eq!(tokens.access, "acc");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn login_outcome_otp_challenge_wins_over_missing_tokens() {
    let json = r#"{"message": "Verification required", "otp_required": true}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.outcome(), LoginOutcome::OtpRequired);
}

#[test]
fn login_outcome_without_tokens_or_challenge_is_rejected() {
    let json = r#"{"message": "Login failed"}"#;
    let resp: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.outcome(), LoginOutcome::Rejected("Login failed".to_owned()));
}

// =============================================================
// UserInfo::display_name
// =============================================================

#[test]
fn display_name_prefers_full_name() {
    let user = UserInfo {
        id: 1,
        username: "sbennett".to_owned(),
        email: None,
        first_name: Some("Sarah".to_owned()),
        last_name: Some("Bennett".to_owned()),
    };
    assert_eq!(user.display_name(), "Sarah Bennett");
}

#[test]
fn display_name_falls_back_to_username() {
    let user = UserInfo {
        id: 1,
        username: "sbennett".to_owned(),
        email: None,
        first_name: None,
        last_name: None,
    };
    assert_eq!(user.display_name(), "sbennett");
}

// =============================================================
// Lenient numeric deserialization
// =============================================================

#[test]
fn assessment_record_accepts_stringified_measurements() {
    let json = r#"{
        "id": 3,
        "patient_id": "MRN-8821",
        "date": "2023-10-24T05:30:00Z",
        "length": "4.2",
        "width": 2.1,
        "stage": "3"
    }"#;
    let record: AssessmentRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.length, Some(4.2));
    assert_eq!(record.width, Some(2.1));
    assert_eq!(record.stage, Some(3));
}

#[test]
fn assessment_record_treats_null_and_empty_as_missing() {
    let json = r#"{
        "id": 3,
        "patient_id": "MRN-8821",
        "date": "2023-10-24T05:30:00Z",
        "length": null,
        "width": "",
        "depth": "  "
    }"#;
    let record: AssessmentRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.length, None);
    assert_eq!(record.width, None);
    assert_eq!(record.depth, None);
}

#[test]
fn assessment_record_rejects_non_numeric_stage() {
    let json = r#"{"id": 1, "stage": "severe"}"#;
    assert!(serde_json::from_str::<AssessmentRecord>(json).is_err());
}

#[test]
fn assessment_record_defaults_missing_collections() {
    let json = r#"{"id": 9}"#;
    let record: AssessmentRecord = serde_json::from_str(json).unwrap();
    assert!(record.image_details.is_empty());
    assert!(record.notes.is_empty());
    assert_eq!(record.related_patient, None);
}

// =============================================================
// Patient defaults
// =============================================================

#[test]
fn patient_defaults_risk_level_to_low() {
    let json = r#"{"id": 4, "name": "James Wilson", "mrn": "MRN-8821"}"#;
    let patient: Patient = serde_json::from_str(json).unwrap();
    assert_eq!(patient.risk_level, "Low");
    assert_eq!(patient.active_wounds, 0);
}

// =============================================================
// CreateAssessmentRequest serialization
// =============================================================

#[test]
fn create_request_serializes_image_ids_in_order() {
    let request = CreateAssessmentRequest {
        patient_id: "P-1002".to_owned(),
        related_patient: Some(12),
        notes: "Granulation at edges".to_owned(),
        image_ids: vec![41, 17, 99],
        wound_type: "pressure_injury".to_owned(),
        stage: 2,
        exudate: "low".to_owned(),
        length: 4.2,
        width: 2.1,
        depth: 0.5,
        pain_level: 4,
        location: "Left Forearm".to_owned(),
        onset_date: "2023-10-01".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["image_ids"], serde_json::json!([41, 17, 99]));
    assert_eq!(value["patient_id"], "P-1002");
}
