use super::*;
use crate::net::types::RoomRef;

fn item(id: i64, serial: &str, name: &str, rooms: &[(i64, i64)]) -> Item {
    Item {
        id,
        serial_num: serial.to_owned(),
        item_name: name.to_owned(),
        par_level: 10,
        room_items: rooms
            .iter()
            .enumerate()
            .map(|(idx, &(room_id, quantity))| RoomItem {
                id: id * 100 + idx as i64,
                room_id,
                item_id: id,
                quantity,
                uom: "box".to_owned(),
                expiry_date: Some("2026-09-01".to_owned()),
                room: Some(RoomRef {
                    name: format!("Room {room_id}"),
                }),
            })
            .collect(),
    }
}

fn summary(id: i64, name: &str) -> RoomSummary {
    RoomSummary {
        id,
        name: name.to_owned(),
    }
}

// =============================================================
// Setters
// =============================================================

#[test]
fn set_rooms_clears_loading_and_error() {
    let mut state = CatalogState {
        rooms_loading: true,
        rooms_error: Some("boom".to_owned()),
        ..CatalogState::default()
    };
    state.set_rooms(vec![summary(1, "Pharmacy")]);
    assert!(!state.rooms_loading);
    assert_eq!(state.rooms_error, None);
}

#[test]
fn set_items_clears_loading_and_error() {
    let mut state = CatalogState {
        items_loading: true,
        items_error: Some("boom".to_owned()),
        ..CatalogState::default()
    };
    state.set_items(vec![item(7, "SN-1", "Saline", &[])]);
    assert!(!state.items_loading);
    assert_eq!(state.items_error, None);
}

// =============================================================
// room_name
// =============================================================

#[test]
fn room_name_resolves_known_rooms() {
    let mut state = CatalogState::default();
    state.set_rooms(vec![summary(1, "Pharmacy"), summary(2, "Storage")]);
    assert_eq!(state.room_name(2), Some("Storage"));
    assert_eq!(state.room_name(9), None);
}

// =============================================================
// items_in_room
// =============================================================

#[test]
fn items_in_room_filters_by_room() {
    let mut state = CatalogState::default();
    state.set_items(vec![
        item(7, "SN-1", "Saline", &[(1, 3), (2, 5)]),
        item(8, "SN-2", "Gauze", &[(2, 1)]),
    ]);
    let rows = state.items_in_room(2);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.serial_num, "SN-1");
    assert_eq!(rows[0].1.quantity, 5);
    assert_eq!(rows[1].0.serial_num, "SN-2");
}

#[test]
fn items_in_room_empty_for_unknown_room() {
    let mut state = CatalogState::default();
    state.set_items(vec![item(7, "SN-1", "Saline", &[(1, 3)])]);
    assert!(state.items_in_room(9).is_empty());
}

// =============================================================
// stock_rows
// =============================================================

#[test]
fn stock_rows_flatten_per_room_records() {
    let mut state = CatalogState::default();
    state.set_items(vec![item(7, "SN-1", "Saline", &[(1, 3), (2, 5)])]);
    let rows = state.stock_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].room_name, "Room 1");
    assert_eq!(rows[1].quantity, 5);
}

#[test]
fn stock_rows_missing_room_ref_gets_placeholder() {
    let mut without_ref = item(7, "SN-1", "Saline", &[(1, 3)]);
    without_ref.room_items[0].room = None;
    let mut state = CatalogState::default();
    state.set_items(vec![without_ref]);
    assert_eq!(state.stock_rows()[0].room_name, "Room not found");
}
