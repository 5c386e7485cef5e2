use super::*;
use crate::state::uploads::LocalKey;

fn draft_for_test() -> AssessmentDraft {
    AssessmentDraft::for_patient("P-1002", 12)
}

fn ready_tracker(ids: &[i64]) -> UploadTracker {
    let mut tracker = UploadTracker::default();
    for id in ids {
        let key = LocalKey::generate();
        tracker.begin(key.clone(), format!("img-{id}.jpg"), 1024, None);
        assert!(tracker.mark_ready(&key, *id));
    }
    tracker
}

// =============================================================
// Submission preconditions, in order
// =============================================================

#[test]
fn submit_blocked_without_images() {
    let draft = draft_for_test();
    let tracker = UploadTracker::default();
    assert_eq!(draft.submit_block(&tracker), Some(SubmitBlock::NoImages));
    assert!(draft.prepare_request(&tracker).is_err());
}

#[test]
fn submit_blocked_while_uploads_in_flight() {
    let draft = draft_for_test();
    let mut tracker = UploadTracker::default();
    tracker.begin(LocalKey::generate(), "a.jpg".to_owned(), 1024, None);
    assert_eq!(
        draft.submit_block(&tracker),
        Some(SubmitBlock::UploadsInFlight)
    );
}

#[test]
fn submit_blocked_by_failed_upload() {
    let draft = draft_for_test();
    let mut tracker = ready_tracker(&[41]);
    let bad = LocalKey::generate();
    tracker.begin(bad.clone(), "bad.png".to_owned(), 1024, None);
    assert!(tracker.mark_failed(&bad, "network error".to_owned()));
    assert_eq!(draft.submit_block(&tracker), Some(SubmitBlock::FailedUploads));
}

#[test]
fn submit_blocked_without_patient_reference() {
    let mut draft = draft_for_test();
    draft.patient_mrn = "   ".to_owned();
    let tracker = ready_tracker(&[41]);
    assert_eq!(draft.submit_block(&tracker), Some(SubmitBlock::MissingPatient));
}

#[test]
fn in_flight_upload_reported_before_failed_upload() {
    let draft = draft_for_test();
    let mut tracker = UploadTracker::default();
    let bad = LocalKey::generate();
    tracker.begin(bad.clone(), "bad.png".to_owned(), 1024, None);
    assert!(tracker.mark_failed(&bad, "boom".to_owned()));
    tracker.begin(LocalKey::generate(), "pending.jpg".to_owned(), 1024, None);
    assert_eq!(
        draft.submit_block(&tracker),
        Some(SubmitBlock::UploadsInFlight)
    );
}

// =============================================================
// Payload construction
// =============================================================

#[test]
fn prepare_request_carries_both_remote_ids_in_order() {
    let mut draft = draft_for_test();
    draft.notes = "Edges granulating".to_owned();
    draft.measurements = Measurements {
        length: 4.2,
        width: 2.1,
        depth: 0.5,
    };
    let tracker = ready_tracker(&[41, 42]);

    let request = draft.prepare_request(&tracker).unwrap();
    assert_eq!(request.patient_id, "P-1002");
    assert_eq!(request.related_patient, Some(12));
    assert_eq!(request.image_ids, vec![41, 42]);
    assert_eq!(request.wound_type, "pressure_injury");
    assert_eq!(request.length, 4.2);
}

#[test]
fn recovery_after_removing_failed_upload() {
    let draft = draft_for_test();
    let mut tracker = ready_tracker(&[41]);
    let bad = LocalKey::generate();
    tracker.begin(bad.clone(), "bad.png".to_owned(), 1024, None);
    assert!(tracker.mark_failed(&bad, "network error".to_owned()));
    assert!(draft.prepare_request(&tracker).is_err());

    assert!(tracker.remove(&bad).is_some());
    let request = draft.prepare_request(&tracker).unwrap();
    assert_eq!(request.image_ids, vec![41]);
}

// =============================================================
// Submission phase machine
// =============================================================

#[test]
fn submit_phases_follow_editing_submitting_done() {
    let mut draft = draft_for_test();
    assert_eq!(draft.phase, SubmitPhase::Editing);

    draft.begin_submit();
    assert_eq!(draft.phase, SubmitPhase::Submitting);

    draft.complete_submit();
    assert_eq!(draft.phase, SubmitPhase::Done);
}

#[test]
fn failed_submit_returns_to_editing_and_preserves_fields() {
    let mut draft = draft_for_test();
    draft.notes = "Important notes".to_owned();
    draft.begin_submit();
    draft.fail_submit("MRN does not exist".to_owned());

    assert_eq!(draft.phase, SubmitPhase::Editing);
    assert_eq!(draft.error.as_deref(), Some("MRN does not exist"));
    assert_eq!(draft.notes, "Important notes");
    assert_eq!(draft.patient_mrn, "P-1002");
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut draft = draft_for_test();
    draft.begin_submit();
    draft.fail_submit("first failure".to_owned());
    draft.begin_submit();
    assert_eq!(draft.error, None);
    assert_eq!(draft.phase, SubmitPhase::Submitting);
}

#[test]
fn phase_transitions_ignore_out_of_order_calls() {
    let mut draft = draft_for_test();
    // Completing or failing while still editing is a no-op.
    draft.complete_submit();
    assert_eq!(draft.phase, SubmitPhase::Editing);
    draft.fail_submit("stray".to_owned());
    assert_eq!(draft.phase, SubmitPhase::Editing);
    assert_eq!(draft.error, None);
}

// =============================================================
// Patient backfill
// =============================================================

#[test]
fn ensure_patient_fills_only_when_missing() {
    let mut draft = AssessmentDraft::default();
    draft.ensure_patient("MRN-9932", 5);
    assert_eq!(draft.patient_mrn, "MRN-9932");
    assert_eq!(draft.patient_id, Some(5));

    draft.ensure_patient("MRN-0000", 6);
    assert_eq!(draft.patient_mrn, "MRN-9932");
    assert_eq!(draft.patient_id, Some(5));
}

// =============================================================
// Form vocabulary
// =============================================================

#[test]
fn wound_type_values_round_trip() {
    for wound_type in WoundType::all() {
        assert_eq!(WoundType::from_value(wound_type.value()), wound_type);
    }
    assert_eq!(WoundType::from_value("unheard_of"), WoundType::Other);
}

#[test]
fn exudate_values_round_trip() {
    for exudate in ExudateAmount::all() {
        assert_eq!(ExudateAmount::from_value(exudate.value()), exudate);
    }
    assert_eq!(ExudateAmount::from_value("gushing"), ExudateAmount::Low);
}

#[test]
fn pain_descriptor_bands() {
    assert_eq!(pain_descriptor(0), "No Pain");
    assert_eq!(pain_descriptor(2), "Mild");
    assert_eq!(pain_descriptor(4), "Moderate");
    assert_eq!(pain_descriptor(8), "Severe");
    assert_eq!(pain_descriptor(10), "Worst Possible");
}
