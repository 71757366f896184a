//! Building-list state for the buildings page and dashboard selector.
//!
//! DESIGN
//! ======
//! One fetched copy of the user's buildings, refetched on mount and after a
//! create. Which building/room is open is page-local navigation state kept
//! here so the buildings page survives re-renders.

#[cfg(test)]
#[path = "buildings_test.rs"]
mod buildings_test;

use crate::net::types::{Building, Room};

/// Shared building-list state backed by `GET /buildings/:userId`.
#[derive(Clone, Debug, Default)]
pub struct BuildingsState {
    pub items: Vec<Building>,
    pub loading: bool,
    pub error: Option<String>,
    /// Building whose floorplan is open, if any.
    pub open_building_id: Option<i64>,
    /// Room view the user drilled into, if any.
    pub selected_room: Option<Room>,
}

impl BuildingsState {
    /// Replace the fetched list, clearing any stale error.
    pub fn set_items(&mut self, items: Vec<Building>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// The currently open building, if it still exists in the list.
    pub fn open_building(&self) -> Option<&Building> {
        let id = self.open_building_id?;
        self.items.iter().find(|b| b.id == id)
    }

    /// Whether `user_id` administers the currently open building.
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.open_building()
            .map(|b| b.users.iter().any(|u| u.user_id == user_id && u.admin))
            .unwrap_or(false)
    }

    /// Drill into a room view.
    pub fn select_room(&mut self, room: Room) {
        self.selected_room = Some(room);
    }

    /// Leave the room view, back to the building list.
    pub fn back_to_list(&mut self) {
        self.selected_room = None;
        self.open_building_id = None;
    }
}
