use super::*;

// =============================================================
// push / dismiss
// =============================================================

#[test]
fn success_and_error_queue_in_order() {
    let mut state = ToastsState::default();
    state.success("Item added");
    state.error("Checkout failed", "status 500");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].title, "Item added");
    assert!(!state.toasts[0].is_error);
    assert!(state.toasts[1].is_error);
    assert_eq!(state.toasts[1].detail, "status 500");
}

#[test]
fn ids_are_unique_and_monotonic() {
    let mut state = ToastsState::default();
    let a = state.success("a");
    let b = state.success("b");
    let c = state.success("c");
    assert!(a < b && b < c);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastsState::default();
    let a = state.success("a");
    let b = state.success("b");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_ignored() {
    let mut state = ToastsState::default();
    state.success("a");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_not_reused_after_dismiss() {
    let mut state = ToastsState::default();
    let a = state.success("a");
    state.dismiss(a);
    let b = state.success("b");
    assert_ne!(a, b);
}
