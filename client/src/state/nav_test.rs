use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn nav_state_default_shows_dashboard() {
    let nav = NavState::default();
    assert_eq!(nav.active_tab, Tab::Dashboard);
    assert_eq!(nav.screen(), Screen::Dashboard);
}

// =============================================================
// Tab selection resets drill-down state
// =============================================================

#[test]
fn select_tab_clears_flags_and_selection() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::Patients);
    nav.open_patient(12);
    nav.start_assessment();
    nav.select_tab(Tab::Assessments);

    assert_eq!(nav.active_tab, Tab::Assessments);
    assert!(!nav.adding_patient);
    assert!(!nav.creating_assessment);
    assert_eq!(nav.selected_patient, None);
    assert_eq!(nav.screen(), Screen::Assessments);
}

#[test]
fn select_tab_clears_add_patient_form() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::Patients);
    nav.start_add_patient();
    assert_eq!(nav.screen(), Screen::AddPatient);

    nav.select_tab(Tab::Dashboard);
    assert_eq!(nav.screen(), Screen::Dashboard);
    assert!(!nav.adding_patient);
}

// =============================================================
// Drill-down keeps the active tab
// =============================================================

#[test]
fn open_patient_does_not_change_tab() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::Patients);
    nav.open_patient(12);

    assert_eq!(nav.active_tab, Tab::Patients);
    assert_eq!(nav.screen(), Screen::PatientProfile(12));
}

#[test]
fn open_patient_from_dashboard_keeps_dashboard_tab() {
    let mut nav = NavState::default();
    nav.open_patient(3);
    assert_eq!(nav.active_tab, Tab::Dashboard);
    assert_eq!(nav.screen(), Screen::PatientProfile(3));
}

#[test]
fn close_patient_returns_to_tab_screen() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::Patients);
    nav.open_patient(12);
    nav.close_patient();
    assert_eq!(nav.screen(), Screen::Patients);
}

// =============================================================
// Assessment drafting
// =============================================================

#[test]
fn start_assessment_requires_selected_patient() {
    let mut nav = NavState::default();
    nav.start_assessment();
    assert!(!nav.creating_assessment);
    assert_eq!(nav.screen(), Screen::Dashboard);
}

#[test]
fn assessment_screen_sits_above_patient_profile() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::Patients);
    nav.open_patient(12);
    nav.start_assessment();
    assert_eq!(nav.screen(), Screen::NewAssessment(12));

    nav.finish_assessment();
    assert_eq!(nav.screen(), Screen::PatientProfile(12));
}

// =============================================================
// Persistence round-trip
// =============================================================

#[test]
fn nav_state_round_trips_through_json() {
    let mut nav = NavState::default();
    nav.select_tab(Tab::Patients);
    nav.open_patient(42);
    nav.start_assessment();

    let raw = serde_json::to_string(&nav).unwrap();
    let restored: NavState = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, nav);
    assert_eq!(restored.screen(), Screen::NewAssessment(42));
}

#[test]
fn nav_state_tolerates_missing_fields_in_stored_json() {
    let restored: NavState = serde_json::from_str(r#"{"active_tab": "Patients"}"#).unwrap();
    assert_eq!(restored.active_tab, Tab::Patients);
    assert_eq!(restored.selected_patient, None);
}
