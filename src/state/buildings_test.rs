use super::*;
use crate::net::types::BuildingUser;

fn building(id: i64, admin_user: Option<i64>) -> Building {
    Building {
        id,
        name: format!("Building {id}"),
        image_size: "200px".to_owned(),
        building_img_url: "https://x/y".to_owned(),
        rooms: Vec::new(),
        users: admin_user
            .map(|user_id| {
                vec![BuildingUser {
                    id: 1,
                    building_id: id,
                    user_id,
                    admin: true,
                }]
            })
            .unwrap_or_default(),
    }
}

fn room(id: i64) -> Room {
    Room {
        id,
        name: format!("Room {id}"),
        left: 1.0,
        top: 2.0,
        width: 10.0,
        height: 10.0,
        building_id: 1,
    }
}

// =============================================================
// set_items
// =============================================================

#[test]
fn set_items_clears_loading_and_error() {
    let mut state = BuildingsState {
        loading: true,
        error: Some("boom".to_owned()),
        ..BuildingsState::default()
    };
    state.set_items(vec![building(1, None)]);
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

// =============================================================
// open_building / is_admin
// =============================================================

#[test]
fn open_building_resolves_by_id() {
    let mut state = BuildingsState::default();
    state.set_items(vec![building(1, None), building(2, None)]);
    state.open_building_id = Some(2);
    assert_eq!(state.open_building().map(|b| b.id), Some(2));
}

#[test]
fn open_building_none_when_missing() {
    let mut state = BuildingsState::default();
    state.set_items(vec![building(1, None)]);
    state.open_building_id = Some(9);
    assert!(state.open_building().is_none());
}

#[test]
fn is_admin_checks_membership_flag() {
    let mut state = BuildingsState::default();
    state.set_items(vec![building(1, Some(3))]);
    state.open_building_id = Some(1);
    assert!(state.is_admin(3));
    assert!(!state.is_admin(4));
}

#[test]
fn is_admin_false_without_open_building() {
    let state = BuildingsState::default();
    assert!(!state.is_admin(3));
}

// =============================================================
// Room navigation
// =============================================================

#[test]
fn select_room_then_back_returns_to_list() {
    let mut state = BuildingsState::default();
    state.open_building_id = Some(1);
    state.select_room(room(4));
    assert_eq!(state.selected_room.as_ref().map(|r| r.id), Some(4));

    state.back_to_list();
    assert!(state.selected_room.is_none());
    assert!(state.open_building_id.is_none());
}
