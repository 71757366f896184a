use super::*;

fn user() -> User {
    User {
        id: 3,
        email: "nurse@example.com".to_owned(),
        name: "Nurse".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_signed_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.user_id(), None);
    assert!(!state.loading);
}

// =============================================================
// is_authenticated
// =============================================================

#[test]
fn token_alone_is_not_authenticated() {
    let state = AuthState {
        token: Some("tok".to_owned()),
        ..AuthState::default()
    };
    assert!(!state.is_authenticated());
}

#[test]
fn token_plus_user_is_authenticated() {
    let state = AuthState {
        token: Some("tok".to_owned()),
        user: Some(user()),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.user_id(), Some(3));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_drops_the_entire_session() {
    let mut state = AuthState {
        token: Some("tok".to_owned()),
        user: Some(user()),
        loading: true,
    };
    state.clear();
    assert_eq!(state.token, None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}
