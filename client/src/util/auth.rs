//! Session persistence and shared auth UI behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session object is the only holder of credentials on the client. It is
//! saved here at login, loaded here at startup, and cleared here at logout.
//! Clearing also wipes the persisted navigation context, so a later sign-in
//! starts from a clean workspace. Route components apply identical
//! unauthenticated redirect behavior through [`install_unauth_redirect`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::nav::NavState;
use crate::state::session::{Session, SessionState};
use crate::util::persistence;

const SESSION_STORAGE_KEY: &str = "woundtrack_session";

/// Restore the persisted session, if one exists.
pub fn load_session() -> Option<Session> {
    persistence::load_json(SESSION_STORAGE_KEY)
}

/// Persist the session at login.
pub fn save_session(session: &Session) {
    persistence::save_json(SESSION_STORAGE_KEY, session);
}

/// Drop the persisted session and navigation context at logout.
pub fn clear_session() {
    persistence::remove(SESSION_STORAGE_KEY);
    persistence::remove(NavState::STORAGE_KEY);
}

/// Redirect to `/login` whenever the session has settled and nobody is
/// signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_signed_in() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
