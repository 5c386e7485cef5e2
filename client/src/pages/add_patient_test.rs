use super::*;

fn filled_form() -> PatientForm {
    PatientForm {
        first_name: "James".to_owned(),
        last_name: "Wilson".to_owned(),
        mrn: "MRN-8821".to_owned(),
        dob: "1954-03-02".to_owned(),
        ..PatientForm::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn complete_form_validates() {
    assert!(validate_form(&filled_form()).is_ok());
}

#[test]
fn name_is_required() {
    let mut form = filled_form();
    form.first_name = "  ".to_owned();
    assert!(validate_form(&form).is_err());

    let mut form = filled_form();
    form.last_name = String::new();
    assert!(validate_form(&form).is_err());
}

#[test]
fn mrn_and_dob_are_required() {
    let mut form = filled_form();
    form.mrn = String::new();
    assert!(validate_form(&form).is_err());

    let mut form = filled_form();
    form.dob = String::new();
    assert!(validate_form(&form).is_err());
}

// =============================================================
// Payload
// =============================================================

#[test]
fn payload_joins_and_trims_name_parts() {
    let mut form = filled_form();
    form.first_name = "  James ".to_owned();
    form.last_name = " Wilson  ".to_owned();
    form.mrn = " MRN-8821 ".to_owned();

    let payload = build_payload(&form);
    assert_eq!(payload.name, "James Wilson");
    assert_eq!(payload.mrn, "MRN-8821");
    assert_eq!(payload.dob, "1954-03-02");
}
