#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::UserInfo;

/// An authenticated session: the token pair plus the clinician it belongs to.
///
/// This is the single owner of credentials on the client. It is written to
/// `localStorage` at login, restored at startup, and removed at logout; no
/// other module touches token storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to every API call.
    pub access: String,
    /// Refresh token held for future token renewal.
    pub refresh: String,
    /// The signed-in clinician.
    pub user: UserInfo,
}

/// Session state tracking the current sign-in and restore status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The active session, if signed in.
    pub session: Option<Session>,
    /// True while a restored token is being revalidated against the API.
    pub loading: bool,
}

impl SessionState {
    /// The access token to attach to API calls, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access.clone())
    }

    /// The signed-in clinician, if any.
    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Whether a session is present (regardless of revalidation).
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
