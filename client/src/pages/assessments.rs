//! Assessment history screen: all patients, newest first.

use leptos::prelude::*;

use crate::state::history::{self, HistoryEpoch};
use crate::state::session::SessionState;
use crate::util::dates;

/// Assessment history screen component.
#[component]
pub fn AssessmentsScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let epoch = expect_context::<RwSignal<HistoryEpoch>>();

    let query = RwSignal::new(String::new());
    let action_error = RwSignal::new(Option::<String>::None);
    let deleting = RwSignal::new(Option::<i64>::None);

    let records = LocalResource::new(move || {
        epoch.track();
        let token = session.get().bearer();
        async move { crate::net::api::fetch_assessments(token.as_deref()).await }
    });

    let on_delete = move |assessment_id: i64| {
        if deleting.get().is_some() {
            return;
        }
        deleting.set(Some(assessment_id));
        action_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().bearer();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_assessment(token.as_deref(), assessment_id).await {
                    Ok(()) => epoch.update(|e| e.bump()),
                    Err(message) => {
                        log::warn!("delete of assessment {assessment_id} failed: {message}");
                        action_error.set(Some(message));
                    }
                }
                deleting.set(None);
            });
        }
    };

    view! {
        <div class="assessments">
            <header class="assessments__header">
                <div>
                    <h1>"Assessment History"</h1>
                    <p>"View and manage wound assessments across all patients."</p>
                </div>
            </header>

            <input
                class="assessments__search"
                type="text"
                placeholder="Search by patient, MRN, or wound location..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <Show when=move || action_error.get().is_some()>
                <p class="assessments__error">{move || action_error.get().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading assessments..."</p> }>
                {move || {
                    records
                        .get()
                        .map(|result| match result {
                            Ok(all) => {
                                let visible = history::sort_date_desc(
                                    history::filter_assessments(&all, &query.get()),
                                );
                                if visible.is_empty() {
                                    view! {
                                        <p class="assessments__empty">"No assessments found."</p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="assessments__table">
                                            <thead>
                                                <tr>
                                                    <th>"Date"</th>
                                                    <th>"Patient"</th>
                                                    <th>"Wound"</th>
                                                    <th>"Area"</th>
                                                    <th>"Stage"</th>
                                                    <th>"Notes"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {visible
                                                    .into_iter()
                                                    .map(|r| {
                                                        let when = dates::format_date(&r.date);
                                                        let time = dates::format_time(&r.date)
                                                            .unwrap_or_default();
                                                        let wound =
                                                            history::wound_type_display(&r);
                                                        let location = r
                                                            .location
                                                            .clone()
                                                            .unwrap_or_default();
                                                        let area = history::format_area(&r);
                                                        let stage = history::stage_display(&r);
                                                        let notes =
                                                            history::notes_excerpt(&r.notes);
                                                        let record_id = r.id;
                                                        view! {
                                                            <tr>
                                                                <td>
                                                                    <div>{when}</div>
                                                                    <div class="assessments__time">
                                                                        {time}
                                                                    </div>
                                                                </td>
                                                                <td>{r.patient_id.clone()}</td>
                                                                <td>
                                                                    <div>{location}</div>
                                                                    <div class="assessments__type">
                                                                        {wound}
                                                                    </div>
                                                                </td>
                                                                <td>{area}</td>
                                                                <td>{stage}</td>
                                                                <td>{notes}</td>
                                                                <td>
                                                                    <button
                                                                        class="btn btn--danger"
                                                                        disabled=move || {
                                                                            deleting.get()
                                                                                == Some(record_id)
                                                                        }
                                                                        on:click=move |_| {
                                                                            on_delete(record_id);
                                                                        }
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                            }
                            Err(message) => {
                                view! { <p class="assessments__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
