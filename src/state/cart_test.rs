use super::*;
use crate::net::types::ItemRef;

fn line(id: i64) -> CartLineItem {
    CartLineItem {
        id,
        cart_id: 5,
        item_id: 7,
        room_id: 4,
        quantity: 2,
        expiry_date: Some("2026-09-01".to_owned()),
        item: ItemRef {
            id: 7,
            serial_num: "SN-1".to_owned(),
            item_name: "Saline".to_owned(),
            par_level: 10,
        },
    }
}

// =============================================================
// set_lines / clear
// =============================================================

#[test]
fn set_lines_replaces_and_clears_error() {
    let mut state = CartState {
        loading: true,
        error: Some("boom".to_owned()),
        ..CartState::default()
    };
    state.set_lines(vec![line(1), line(2)]);
    assert_eq!(state.len(), 2);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn clear_empties_the_cart() {
    let mut state = CartState::default();
    state.set_lines(vec![line(1)]);
    state.clear();
    assert!(state.is_empty());
}

#[test]
fn default_cart_is_closed_and_empty() {
    let state = CartState::default();
    assert!(!state.open);
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}
