//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `nav`, `uploads`, `draft`, etc.) so
//! individual components can depend on small focused models. Every model is a
//! plain struct provided as an `RwSignal` via context; updates go through
//! methods rather than field surgery so invariants live in one place and the
//! logic stays unit-testable off the browser.

pub mod draft;
pub mod history;
pub mod nav;
pub mod patients;
pub mod session;
pub mod uploads;
