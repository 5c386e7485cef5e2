//! New-assessment screen: clinical form, image uploads, and submission.
//!
//! SUBMISSION
//! ==========
//! The draft and the upload tracker meet only here. `prepare_request` either
//! yields a payload or the first blocking reason; a blocked submit therefore
//! never reaches the network. A rejected submit keeps every field and every
//! uploaded image so the user retries without re-entering anything.

use leptos::prelude::*;

use crate::components::upload_zone::UploadZone;
use crate::state::draft::{
    AssessmentDraft, ExudateAmount, SubmitPhase, WoundType, pain_descriptor,
};
use crate::state::history::HistoryEpoch;
use crate::state::nav::NavState;
use crate::state::session::SessionState;
use crate::state::uploads::UploadTracker;
use crate::util::files;

fn release_previews(uploads: RwSignal<UploadTracker>) {
    let mut drained = Vec::new();
    uploads.update(|t| drained = t.clear());
    for image in drained {
        if let Some(url) = image.preview_url {
            files::revoke_preview_url(&url);
        }
    }
}

/// New-assessment screen component.
#[component]
pub fn NewAssessmentScreen(patient_id: i64) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let draft = expect_context::<RwSignal<AssessmentDraft>>();
    let uploads = expect_context::<RwSignal<UploadTracker>>();
    let history_epoch = expect_context::<RwSignal<HistoryEpoch>>();

    let patient = LocalResource::new(move || {
        let token = session.get().bearer();
        async move { crate::net::api::fetch_patient(token.as_deref(), patient_id).await }
    });

    // After a reload the draft starts empty; attach the patient as soon as
    // the profile arrives. An already-attached draft is left alone.
    Effect::new(move || {
        if let Some(Some(p)) = patient.get() {
            draft.update(|d| d.ensure_patient(&p.mrn, p.id));
        }
    });

    let submitting = move || draft.get().phase == SubmitPhase::Submitting;

    let on_cancel = move |_| {
        release_previews(uploads);
        draft.set(AssessmentDraft::default());
        nav.update(NavState::finish_assessment);
    };

    let on_submit = move |_| {
        if submitting() {
            return;
        }
        let request = match draft.get().prepare_request(&uploads.get()) {
            Ok(request) => request,
            Err(block) => {
                draft.update(|d| d.error = Some(block.user_message().to_owned()));
                return;
            }
        };
        draft.update(AssessmentDraft::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().bearer();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_assessment(token.as_deref(), &request).await {
                    Ok(_) => {
                        draft.update(AssessmentDraft::complete_submit);
                        release_previews(uploads);
                        draft.set(AssessmentDraft::default());
                        history_epoch.update(|e| e.bump());
                        nav.update(NavState::finish_assessment);
                    }
                    Err(message) => {
                        log::warn!("assessment submission rejected: {message}");
                        draft.update(|d| d.fail_submit(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, history_epoch);
        }
    };

    view! {
        <div class="assessment-form">
            <header class="assessment-form__header">
                <h1>"Add New Wound Assessment"</h1>
                <div class="assessment-form__actions">
                    <button class="btn" on:click=on_cancel disabled=submitting>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=on_submit disabled=submitting>
                        {move || if submitting() { "Saving..." } else { "Save Assessment" }}
                    </button>
                </div>
            </header>

            <Show when=move || draft.get().error.is_some()>
                <div class="assessment-form__error">
                    {move || draft.get().error.unwrap_or_default()}
                </div>
            </Show>

            <div class="assessment-form__patient">
                {move || {
                    patient
                        .get()
                        .flatten()
                        .map_or_else(
                            || "Loading patient...".to_owned(),
                            |p| format!("Patient: {} [MRN: {}]", p.name, p.mrn),
                        )
                }}
            </div>

            <section class="form-section">
                <h2>"Clinical Details"</h2>
                <div class="form-grid">
                    <label class="form-field">
                        "Wound Type"
                        <select on:change=move |ev| {
                            draft
                                .update(|d| {
                                    d.wound_type = WoundType::from_value(&event_target_value(&ev));
                                });
                        }>
                            {WoundType::all()
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option
                                            value=option.value()
                                            selected=move || draft.get().wound_type == option
                                        >
                                            {option.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Onset Date"
                        <input
                            type="date"
                            prop:value=move || draft.get().onset_date
                            on:input=move |ev| {
                                draft.update(|d| d.onset_date = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Wound Stage"
                        <select on:change=move |ev| {
                            draft
                                .update(|d| {
                                    d.stage = event_target_value(&ev).parse().unwrap_or(1);
                                });
                        }>
                            {(1u8..=4)
                                .map(|stage| {
                                    view! {
                                        <option
                                            value=stage.to_string()
                                            selected=move || draft.get().stage == stage
                                        >
                                            {format!("Stage {stage}")}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Exudate Amount"
                        <select on:change=move |ev| {
                            draft
                                .update(|d| {
                                    d.exudate = ExudateAmount::from_value(
                                        &event_target_value(&ev),
                                    );
                                });
                        }>
                            {ExudateAmount::all()
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option
                                            value=option.value()
                                            selected=move || draft.get().exudate == option
                                        >
                                            {option.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="form-field">
                        "Wound Location"
                        <input
                            type="text"
                            placeholder="e.g. Left Forearm"
                            prop:value=move || draft.get().location
                            on:input=move |ev| {
                                draft.update(|d| d.location = event_target_value(&ev));
                            }
                        />
                    </label>
                </div>
            </section>

            <section class="form-section">
                <h2>"Measurements"</h2>
                <div class="form-grid form-grid--measurements">
                    <label class="form-field">
                        "Length (cm)"
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            prop:value=move || draft.get().measurements.length.to_string()
                            on:input=move |ev| {
                                draft
                                    .update(|d| {
                                        d.measurements.length = event_target_value(&ev)
                                            .parse()
                                            .unwrap_or_default();
                                    });
                            }
                        />
                    </label>
                    <label class="form-field">
                        "Width (cm)"
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            prop:value=move || draft.get().measurements.width.to_string()
                            on:input=move |ev| {
                                draft
                                    .update(|d| {
                                        d.measurements.width = event_target_value(&ev)
                                            .parse()
                                            .unwrap_or_default();
                                    });
                            }
                        />
                    </label>
                    <label class="form-field">
                        "Depth (cm)"
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            prop:value=move || draft.get().measurements.depth.to_string()
                            on:input=move |ev| {
                                draft
                                    .update(|d| {
                                        d.measurements.depth = event_target_value(&ev)
                                            .parse()
                                            .unwrap_or_default();
                                    });
                            }
                        />
                    </label>
                </div>

                <div class="pain-level">
                    <div class="pain-level__header">
                        <label>"Pain Level"</label>
                        <span class="pain-level__badge">
                            {move || {
                                let level = draft.get().pain_level;
                                format!("{level} - {}", pain_descriptor(level))
                            }}
                        </span>
                    </div>
                    <input
                        type="range"
                        min="0"
                        max="10"
                        prop:value=move || draft.get().pain_level.to_string()
                        on:input=move |ev| {
                            draft
                                .update(|d| {
                                    d.pain_level = event_target_value(&ev).parse().unwrap_or(0);
                                });
                        }
                    />
                </div>
            </section>

            <section class="form-section">
                <h2>"Visual Documentation"</h2>
                <UploadZone/>
            </section>

            <section class="form-section">
                <h2>"Clinical Notes"</h2>
                <textarea
                    class="assessment-form__notes"
                    placeholder="Add detailed observations regarding tissue type, wound edge, surrounding skin, etc."
                    prop:value=move || draft.get().notes
                    on:input=move |ev| {
                        draft.update(|d| d.notes = event_target_value(&ev));
                    }
                ></textarea>
            </section>
        </div>
    }
}
