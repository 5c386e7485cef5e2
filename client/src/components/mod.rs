//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod navbar;
pub mod sidebar;
pub mod upload_zone;
pub mod wound_card;
