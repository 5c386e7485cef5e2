//! Signed-in workspace shell: sidebar, navbar, and the active screen.
//!
//! The inner screens are not separate routes. A small navigation state
//! (tab + transient flags + selected patient) decides which screen renders,
//! and that state is persisted so a reload lands the user exactly where
//! they were.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::add_patient::AddPatientScreen;
use crate::pages::assessments::AssessmentsScreen;
use crate::pages::dashboard::DashboardScreen;
use crate::pages::new_assessment::NewAssessmentScreen;
use crate::pages::patient_profile::PatientProfileScreen;
use crate::pages::patients::PatientsScreen;
use crate::pages::settings::SettingsScreen;
use crate::state::nav::{NavState, Screen};
use crate::state::session::SessionState;
use crate::util::{auth, persistence};

/// Workspace page: everything behind the login wall.
#[component]
pub fn WorkspacePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let navigate = use_navigate();

    auth::install_unauth_redirect(session, navigate);

    // Persist navigation context on every change so a reload restores it.
    Effect::new(move || {
        let state = nav.get();
        persistence::save_json(NavState::STORAGE_KEY, &state);
    });

    view! {
        <div class="workspace">
            <Sidebar/>
            <div class="workspace__main">
                <Navbar/>
                <main class="workspace__content">
                    {move || match nav.get().screen() {
                        Screen::Dashboard => view! { <DashboardScreen/> }.into_any(),
                        Screen::Patients => view! { <PatientsScreen/> }.into_any(),
                        Screen::AddPatient => view! { <AddPatientScreen/> }.into_any(),
                        Screen::PatientProfile(patient_id) => {
                            view! { <PatientProfileScreen patient_id=patient_id/> }.into_any()
                        }
                        Screen::NewAssessment(patient_id) => {
                            view! { <NewAssessmentScreen patient_id=patient_id/> }.into_any()
                        }
                        Screen::Assessments => view! { <AssessmentsScreen/> }.into_any(),
                        Screen::Settings => view! { <SettingsScreen/> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
