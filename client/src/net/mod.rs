//! Networking modules for the clinical REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues bearer-authenticated HTTP calls against the external clinical
//! backend, and `types` defines the wire schema shared by those calls. The
//! backend itself is a separate deployment; this crate only consumes it.

pub mod api;
pub mod types;
