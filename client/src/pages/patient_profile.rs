//! Patient profile screen: demographics, active wounds, and care timeline.

use leptos::prelude::*;

use crate::components::wound_card::WoundCard;
use crate::state::draft::AssessmentDraft;
use crate::state::history::{self, HistoryEpoch};
use crate::state::nav::NavState;
use crate::state::session::SessionState;
use crate::state::uploads::UploadTracker;
use crate::util::{dates, files};

/// Patient profile screen component.
#[component]
pub fn PatientProfileScreen(patient_id: i64) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let draft = expect_context::<RwSignal<AssessmentDraft>>();
    let uploads = expect_context::<RwSignal<UploadTracker>>();
    let history_epoch = expect_context::<RwSignal<HistoryEpoch>>();

    let patient = LocalResource::new(move || {
        let token = session.get().bearer();
        async move { crate::net::api::fetch_patient(token.as_deref(), patient_id).await }
    });

    let records = LocalResource::new(move || {
        history_epoch.track();
        let token = session.get().bearer();
        async move { crate::net::api::fetch_assessments(token.as_deref()).await }
    });

    let on_back = move |_| nav.update(NavState::close_patient);

    let on_new_assessment = move |_| {
        let Some(Some(current)) = patient.get() else {
            return;
        };
        // A leftover draft (e.g. an abandoned one for another patient) must
        // not leak into this assessment; previews are released right away.
        let stale = {
            let mut drained = Vec::new();
            uploads.update(|t| drained = t.clear());
            drained
        };
        for image in stale {
            if let Some(url) = image.preview_url {
                files::revoke_preview_url(&url);
            }
        }
        draft.set(AssessmentDraft::for_patient(&current.mrn, current.id));
        nav.update(NavState::start_assessment);
    };

    view! {
        <div class="patient-profile">
            <nav class="breadcrumbs">
                <button class="breadcrumbs__link" on:click=on_back>
                    "Patients"
                </button>
                <span class="breadcrumbs__sep">">"</span>
                <span class="breadcrumbs__current">
                    {move || {
                        patient
                            .get()
                            .flatten()
                            .map_or_else(|| "...".to_owned(), |p| p.name.clone())
                    }}
                </span>
            </nav>

            <Suspense fallback=move || view! { <p>"Loading patient..."</p> }>
                {move || {
                    patient
                        .get()
                        .map(|loaded| match loaded {
                            Some(p) => {
                                let dob = p
                                    .dob
                                    .as_deref()
                                    .map(dates::format_date)
                                    .unwrap_or_else(|| "--".to_owned());
                                let bed = p
                                    .bed_number
                                    .clone()
                                    .unwrap_or_else(|| "Unassigned".to_owned());
                                let diagnosis = p.diagnosis.clone().unwrap_or_default();
                                view! {
                                    <header class="patient-profile__header">
                                        <div>
                                            <h1>{p.name.clone()}</h1>
                                            <div class="patient-profile__meta">
                                                <span>{format!("MRN: {}", p.mrn)}</span>
                                                <span>{format!("DOB: {dob}")}</span>
                                                <span>{format!("Bed: {bed}")}</span>
                                            </div>
                                            {(!diagnosis.is_empty())
                                                .then(|| {
                                                    view! {
                                                        <span class="condition-badge">
                                                            {diagnosis.clone()}
                                                        </span>
                                                    }
                                                })}
                                        </div>
                                        <button class="btn btn--primary" on:click=on_new_assessment>
                                            "+ New Assessment"
                                        </button>
                                    </header>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="patient-profile__error">
                                        "This patient record could not be loaded."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <section class="patient-profile__wounds">
                <h3>"Active Wounds"</h3>
                <Suspense fallback=move || view! { <p>"Loading assessments..."</p> }>
                    {move || {
                        let loaded_patient = patient.get().flatten();
                        records
                            .get()
                            .map(|result| match (result, loaded_patient) {
                                (Ok(all), Some(p)) => {
                                    let mine = history::sort_date_desc(
                                        history::for_patient(&all, &p),
                                    );
                                    if mine.is_empty() {
                                        view! {
                                            <p class="patient-profile__empty">
                                                "No assessments found for this patient."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="patient-profile__cards">
                                                {mine
                                                    .into_iter()
                                                    .map(|record| {
                                                        view! { <WoundCard record=record/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                (Err(message), _) => {
                                    view! { <p class="patient-profile__error">{message}</p> }
                                        .into_any()
                                }
                                (Ok(_), None) => view! { <p>"Loading..."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
