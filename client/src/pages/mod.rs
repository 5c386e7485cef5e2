//! Page modules for route-level and workspace screens.
//!
//! ARCHITECTURE
//! ============
//! `login` and `workspace` are the two routed pages. The workspace renders
//! exactly one inner screen chosen by the navigation state; each screen
//! module owns its orchestration and delegates rendering details to
//! `components`.

pub mod add_patient;
pub mod assessments;
pub mod dashboard;
pub mod login;
pub mod new_assessment;
pub mod patient_profile;
pub mod patients;
pub mod settings;
pub mod workspace;
