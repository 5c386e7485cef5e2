#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::{Deserialize, Serialize};

/// Top-level workspace tabs, one per sidebar entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Dashboard,
    Patients,
    Assessments,
    Settings,
}

/// Navigation state for the signed-in workspace.
///
/// The workspace renders exactly one screen, decided by [`NavState::screen`]
/// from the active tab, the transient creation flags, and the selected
/// patient. The whole struct round-trips through `localStorage` so a reload
/// restores drill-down context; it is reset at logout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Currently highlighted sidebar tab.
    pub active_tab: Tab,
    /// True while the add-patient form is open.
    #[serde(default)]
    pub adding_patient: bool,
    /// True while a new assessment is being drafted for the selected patient.
    #[serde(default)]
    pub creating_assessment: bool,
    /// Patient whose profile is drilled into, if any.
    #[serde(default)]
    pub selected_patient: Option<i64>,
}

/// The screen the workspace should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Patients,
    AddPatient,
    PatientProfile(i64),
    NewAssessment(i64),
    Assessments,
    Settings,
}

impl NavState {
    /// `localStorage` key the navigation context is persisted under.
    pub const STORAGE_KEY: &'static str = "woundtrack_nav";

    /// Switch tabs. Clears every transient flag and the selected patient so
    /// each tab starts at its top-level screen.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.adding_patient = false;
        self.creating_assessment = false;
        self.selected_patient = None;
    }

    /// Drill into a patient profile. Leaves the active tab untouched so the
    /// sidebar keeps highlighting where the user came from.
    pub fn open_patient(&mut self, patient_id: i64) {
        self.selected_patient = Some(patient_id);
        self.adding_patient = false;
        self.creating_assessment = false;
    }

    /// Leave the patient profile (and any assessment draft under it).
    pub fn close_patient(&mut self) {
        self.selected_patient = None;
        self.creating_assessment = false;
    }

    /// Open the add-patient form.
    pub fn start_add_patient(&mut self) {
        self.adding_patient = true;
    }

    /// Close the add-patient form, returning to the patients list.
    pub fn finish_add_patient(&mut self) {
        self.adding_patient = false;
    }

    /// Open the new-assessment screen for the selected patient.
    /// Ignored when no patient is selected.
    pub fn start_assessment(&mut self) {
        if self.selected_patient.is_some() {
            self.creating_assessment = true;
        }
    }

    /// Leave the new-assessment screen, back to the patient profile.
    pub fn finish_assessment(&mut self) {
        self.creating_assessment = false;
    }

    /// Deterministic screen mapping. Drill-down state wins over the tab:
    /// a selected patient shows the profile (or the assessment draft above
    /// it), the add-patient flag shows the form, otherwise the tab's own
    /// screen renders.
    pub fn screen(&self) -> Screen {
        if let Some(patient_id) = self.selected_patient {
            if self.creating_assessment {
                return Screen::NewAssessment(patient_id);
            }
            return Screen::PatientProfile(patient_id);
        }
        if self.adding_patient {
            return Screen::AddPatient;
        }
        match self.active_tab {
            Tab::Dashboard => Screen::Dashboard,
            Tab::Patients => Screen::Patients,
            Tab::Assessments => Screen::Assessments,
            Tab::Settings => Screen::Settings,
        }
    }
}
