//! Dashboard screen: headline stats derived from the patient directory and
//! the assessment history.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{AssessmentRecord, Patient};
use crate::state::history::{self, HistoryEpoch};
use crate::state::nav::{NavState, Tab};
use crate::state::patients::{self, PatientsEpoch};
use crate::state::session::SessionState;
use crate::util::dates;

/// Headline numbers shown on the dashboard cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct DashboardStats {
    active_patients: usize,
    high_risk: usize,
    total_assessments: usize,
    latest_assessment: Option<String>,
}

fn derive_stats(patient_list: &[Patient], records: &[AssessmentRecord]) -> DashboardStats {
    let latest_assessment = records
        .iter()
        .map(|r| r.date.as_str())
        .max()
        .map(dates::format_date);
    DashboardStats {
        active_patients: patient_list.len(),
        high_risk: patients::high_risk_count(patient_list),
        total_assessments: records.len(),
        latest_assessment,
    }
}

/// Dashboard screen component.
#[component]
pub fn DashboardScreen() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let history_epoch = expect_context::<RwSignal<HistoryEpoch>>();
    let patients_epoch = expect_context::<RwSignal<PatientsEpoch>>();

    let patient_list = LocalResource::new(move || {
        patients_epoch.track();
        let token = session.get().bearer();
        async move {
            crate::net::api::fetch_patients(token.as_deref())
                .await
                .unwrap_or_default()
        }
    });
    let records = LocalResource::new(move || {
        history_epoch.track();
        let token = session.get().bearer();
        async move {
            crate::net::api::fetch_assessments(token.as_deref())
                .await
                .unwrap_or_default()
        }
    });

    let stats = move || {
        let loaded_patients = patient_list.get().unwrap_or_default();
        let loaded_records = records.get().unwrap_or_default();
        derive_stats(&loaded_patients, &loaded_records)
    };

    let greeting = move || {
        session
            .get()
            .user()
            .map(crate::net::types::UserInfo::display_name)
            .map_or_else(
                || "Welcome back".to_owned(),
                |name| format!("Welcome back, {name}"),
            )
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>{greeting}</h1>
                <button
                    class="btn btn--primary"
                    on:click=move |_| nav.update(|n| n.select_tab(Tab::Patients))
                >
                    "View Patients"
                </button>
            </header>

            <Suspense fallback=move || view! { <p>"Loading overview..."</p> }>
                {move || {
                    let s = stats();
                    view! {
                        <div class="dashboard__stats">
                            <div class="stat-card">
                                <div class="stat-card__value">{s.active_patients}</div>
                                <div class="stat-card__label">"Active Patients"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__value">{s.high_risk}</div>
                                <div class="stat-card__label">"High-Risk Patients"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__value">{s.total_assessments}</div>
                                <div class="stat-card__label">"Assessments on Record"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-card__value">
                                    {s.latest_assessment.unwrap_or_else(|| "--".to_owned())}
                                </div>
                                <div class="stat-card__label">"Latest Assessment"</div>
                            </div>
                        </div>
                    }
                }}
            </Suspense>

            <section class="dashboard__recent">
                <h3>"Recent Assessments"</h3>
                <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                    {move || {
                        let recent = history::sort_date_desc(records.get().unwrap_or_default());
                        if recent.is_empty() {
                            view! { <p class="dashboard__empty">"No assessments yet."</p> }
                                .into_any()
                        } else {
                            view! {
                                <ul class="dashboard__recent-list">
                                    {recent
                                        .into_iter()
                                        .take(5)
                                        .map(|r| {
                                            let when = dates::format_date(&r.date);
                                            let what = history::wound_type_display(&r);
                                            view! {
                                                <li>
                                                    <span class="dashboard__recent-date">{when}</span>
                                                    <span>{what}</span>
                                                    <span class="dashboard__recent-mrn">
                                                        {r.patient_id.clone()}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </Suspense>
            </section>
        </div>
    }
}
