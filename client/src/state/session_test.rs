use super::*;

fn sample_session() -> Session {
    Session {
        access: "acc-token".to_owned(),
        refresh: "ref-token".to_owned(),
        user: UserInfo {
            id: 7,
            username: "nurse@example.com".to_owned(),
            email: None,
            first_name: None,
            last_name: None,
        },
    }
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
    assert_eq!(state.bearer(), None);
    assert!(state.user().is_none());
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn bearer_returns_access_token_when_signed_in() {
    let state = SessionState {
        session: Some(sample_session()),
        loading: false,
    };
    assert_eq!(state.bearer(), Some("acc-token".to_owned()));
    assert_eq!(state.user().map(|u| u.id), Some(7));
    assert!(state.is_signed_in());
}

// =============================================================
// Storage round-trip
// =============================================================

#[test]
fn session_round_trips_through_json() {
    let session = sample_session();
    let raw = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, session);
}
