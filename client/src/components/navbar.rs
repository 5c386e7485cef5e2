//! Top navigation bar: section title, dark mode toggle, and the signed-in
//! clinician.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::nav::{NavState, Screen};
use crate::state::session::SessionState;
use crate::util::dark_mode;

fn section_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "Dashboard Overview",
        Screen::Patients | Screen::AddPatient => "Patient Records",
        Screen::PatientProfile(_) => "Patient Profile",
        Screen::NewAssessment(_) => "New Wound Assessment",
        Screen::Assessments => "Wound Assessments",
        Screen::Settings => "Account Settings",
    }
}

/// Navbar component.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let dark = expect_context::<RwSignal<bool>>();

    view! {
        <header class="navbar">
            <h1 class="navbar__title">{move || section_title(nav.get().screen())}</h1>

            <div class="navbar__actions">
                <button
                    class="navbar__icon-btn"
                    title="Toggle dark mode"
                    on:click=move |_| dark.set(dark_mode::toggle(dark.get_untracked()))
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>

                <div class="navbar__user">
                    <span class="navbar__user-name">
                        {move || {
                            session
                                .get()
                                .user()
                                .map(crate::net::types::UserInfo::display_name)
                                .unwrap_or_default()
                        }}
                    </span>
                    <div class="navbar__avatar"></div>
                </div>
            </div>
        </header>
    }
}
