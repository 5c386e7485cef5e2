use super::*;

#[test]
fn section_title_covers_every_screen() {
    assert_eq!(section_title(Screen::Dashboard), "Dashboard Overview");
    assert_eq!(section_title(Screen::Patients), "Patient Records");
    assert_eq!(section_title(Screen::AddPatient), "Patient Records");
    assert_eq!(section_title(Screen::PatientProfile(1)), "Patient Profile");
    assert_eq!(
        section_title(Screen::NewAssessment(1)),
        "New Wound Assessment"
    );
    assert_eq!(section_title(Screen::Assessments), "Wound Assessments");
    assert_eq!(section_title(Screen::Settings), "Account Settings");
}
