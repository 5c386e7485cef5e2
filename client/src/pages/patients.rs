//! Patients directory screen: searchable list with risk badges.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::patients::{self, PatientsEpoch};
use crate::state::session::SessionState;
use crate::util::dates;

/// Patients screen component.
#[component]
pub fn PatientsScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let epoch = expect_context::<RwSignal<PatientsEpoch>>();

    let query = RwSignal::new(String::new());

    let directory = LocalResource::new(move || {
        epoch.track();
        let token = session.get().bearer();
        async move { crate::net::api::fetch_patients(token.as_deref()).await }
    });

    view! {
        <div class="patients">
            <header class="patients__header">
                <div>
                    <h1>"Patients"</h1>
                    <p>"Manage patient records and wound history."</p>
                </div>
                <button
                    class="btn btn--primary"
                    on:click=move |_| nav.update(NavState::start_add_patient)
                >
                    "+ Add Patient"
                </button>
            </header>

            <input
                class="patients__search"
                type="text"
                placeholder="Search by name or MRN..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <Suspense fallback=move || view! { <p>"Loading patients..."</p> }>
                {move || {
                    directory
                        .get()
                        .map(|result| match result {
                            Ok(all) => {
                                let visible = patients::filter_patients(&all, &query.get());
                                if visible.is_empty() {
                                    view! { <p class="patients__empty">"No matching patients."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <table class="patients__table">
                                            <thead>
                                                <tr>
                                                    <th>"Name"</th>
                                                    <th>"MRN"</th>
                                                    <th>"Ward / Bed"</th>
                                                    <th>"Active Wounds"</th>
                                                    <th>"Risk"</th>
                                                    <th>"Last Update"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {visible
                                                    .into_iter()
                                                    .map(|p| {
                                                        let risk_badge =
                                                            patients::risk_class(&p.risk_level);
                                                        let ward = p
                                                            .ward
                                                            .clone()
                                                            .unwrap_or_else(|| "--".to_owned());
                                                        let bed = p
                                                            .bed_number
                                                            .clone()
                                                            .unwrap_or_else(|| {
                                                                "Unassigned".to_owned()
                                                            });
                                                        let updated = p
                                                            .updated_at
                                                            .as_deref()
                                                            .map(dates::format_date)
                                                            .unwrap_or_else(|| "--".to_owned());
                                                        let patient_id = p.id;
                                                        view! {
                                                            <tr
                                                                class="patients__row"
                                                                on:click=move |_| {
                                                                    nav.update(|n| {
                                                                        n.open_patient(patient_id);
                                                                    });
                                                                }
                                                            >
                                                                <td>{p.name.clone()}</td>
                                                                <td>{p.mrn.clone()}</td>
                                                                <td>{format!("{ward} / {bed}")}</td>
                                                                <td>{p.active_wounds}</td>
                                                                <td>
                                                                    <span class=format!(
                                                                        "risk-badge {risk_badge}"
                                                                    )>
                                                                        {p.risk_level.clone()}
                                                                    </span>
                                                                </td>
                                                                <td>{updated}</td>
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
                                view! { <p class="patients__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
