//! Add-patient form screen.

#[cfg(test)]
#[path = "add_patient_test.rs"]
mod add_patient_test;

use leptos::prelude::*;

use crate::net::types::NewPatient;
use crate::state::nav::NavState;
use crate::state::patients::PatientsEpoch;
use crate::state::session::SessionState;

/// Editable form fields, kept as one struct so validation and payload
/// building stay pure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct PatientForm {
    first_name: String,
    last_name: String,
    mrn: String,
    dob: String,
    gender: String,
    blood_group: String,
    ward: String,
    bed_number: String,
    admission_date: String,
    diagnosis: String,
    assigning_physician: String,
    contact_number: String,
    address: String,
    emergency_contact_name: String,
    emergency_contact_number: String,
}

fn validate_form(form: &PatientForm) -> Result<(), &'static str> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err("Enter the patient's first and last name.");
    }
    if form.mrn.trim().is_empty() {
        return Err("Enter a medical record number.");
    }
    if form.dob.trim().is_empty() {
        return Err("Enter the patient's date of birth.");
    }
    Ok(())
}

fn build_payload(form: &PatientForm) -> NewPatient {
    NewPatient {
        name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
        mrn: form.mrn.trim().to_owned(),
        dob: form.dob.trim().to_owned(),
        gender: form.gender.clone(),
        blood_group: form.blood_group.clone(),
        bed_number: form.bed_number.clone(),
        ward: form.ward.clone(),
        admission_date: form.admission_date.clone(),
        diagnosis: form.diagnosis.clone(),
        assigning_physician: form.assigning_physician.clone(),
        contact_number: form.contact_number.clone(),
        address: form.address.clone(),
        emergency_contact_name: form.emergency_contact_name.clone(),
        emergency_contact_number: form.emergency_contact_number.clone(),
    }
}

/// Add-patient screen component.
#[component]
pub fn AddPatientScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let epoch = expect_context::<RwSignal<PatientsEpoch>>();

    let form = RwSignal::new(PatientForm::default());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let on_cancel = move |_| nav.update(NavState::finish_add_patient);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let current = form.get();
        if let Err(message) = validate_form(&current) {
            error.set(Some(message.to_owned()));
            return;
        }
        let payload = build_payload(&current);
        saving.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().bearer();
            leptos::task::spawn_local(async move {
                match crate::net::api::add_patient(token.as_deref(), &payload).await {
                    Ok(_) => {
                        epoch.update(|e| e.bump());
                        nav.update(NavState::finish_add_patient);
                    }
                    Err(message) => {
                        error.set(Some(message));
                        saving.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, session, epoch);
        }
    };

    // One text input bound to a PatientForm field.
    macro_rules! field {
        ($label:expr, $kind:expr, $field:ident) => {
            view! {
                <label class="form-field">
                    {$label}
                    <input
                        type=$kind
                        prop:value=move || form.get().$field
                        on:input=move |ev| {
                            form.update(|f| f.$field = event_target_value(&ev));
                        }
                    />
                </label>
            }
        };
    }

    view! {
        <div class="add-patient">
            <header class="add-patient__header">
                <h1>"Add New Patient"</h1>
            </header>

            <form class="add-patient__form" on:submit=on_save>
                <section class="form-section">
                    <h2>"Identity"</h2>
                    <div class="form-grid">
                        {field!("First Name", "text", first_name)}
                        {field!("Last Name", "text", last_name)}
                        {field!("MRN", "text", mrn)}
                        {field!("Date of Birth", "date", dob)}
                        {field!("Gender", "text", gender)}
                        {field!("Blood Group", "text", blood_group)}
                    </div>
                </section>

                <section class="form-section">
                    <h2>"Admission"</h2>
                    <div class="form-grid">
                        {field!("Ward", "text", ward)}
                        {field!("Room / Bed", "text", bed_number)}
                        {field!("Admission Date", "date", admission_date)}
                        {field!("Assigning Physician", "text", assigning_physician)}
                    </div>
                    <label class="form-field">
                        "Diagnosis"
                        <textarea
                            prop:value=move || form.get().diagnosis
                            on:input=move |ev| {
                                form.update(|f| f.diagnosis = event_target_value(&ev));
                            }
                        ></textarea>
                    </label>
                </section>

                <section class="form-section">
                    <h2>"Contact"</h2>
                    <div class="form-grid">
                        {field!("Contact Number", "text", contact_number)}
                        {field!("Address", "text", address)}
                        {field!("Emergency Contact Name", "text", emergency_contact_name)}
                        {field!("Emergency Contact Number", "text", emergency_contact_number)}
                    </div>
                </section>

                <Show when=move || error.get().is_some()>
                    <p class="add-patient__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="add-patient__actions">
                    <button class="btn" type="button" on:click=on_cancel disabled=move || saving.get()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Patient" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
