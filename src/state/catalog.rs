//! Room and item catalog state shared by the stock workflows.
//!
//! DESIGN
//! ======
//! The rooms and items lists feed the form selects, the all-items table, and
//! the per-room item view. They are fetched once per mount of the owning
//! page; each fetch keeps its own loading/error pair so a failing items call
//! does not blank the room select.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Item, RoomItem, RoomSummary};

/// One flattened stock row for the all-items table.
#[derive(Clone, Debug, PartialEq)]
pub struct StockRow {
    pub room_item_id: i64,
    pub serial_num: String,
    pub item_name: String,
    pub par_level: i64,
    pub room_name: String,
    pub quantity: i64,
    pub uom: String,
    pub expiry_date: Option<String>,
}

/// Shared rooms + items state backed by `/allrooms` and `/allitems`.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub rooms: Vec<RoomSummary>,
    pub rooms_loading: bool,
    pub rooms_error: Option<String>,
    pub items: Vec<Item>,
    pub items_loading: bool,
    pub items_error: Option<String>,
}

impl CatalogState {
    pub fn set_rooms(&mut self, rooms: Vec<RoomSummary>) {
        self.rooms = rooms;
        self.rooms_loading = false;
        self.rooms_error = None;
    }

    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.items_loading = false;
        self.items_error = None;
    }

    /// Resolve a room name for display, e.g. in cart lines.
    pub fn room_name(&self, room_id: i64) -> Option<&str> {
        self.rooms
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| r.name.as_str())
    }

    /// Every item's stock in `room_id`, as (item, stock-record) pairs.
    pub fn items_in_room(&self, room_id: i64) -> Vec<(&Item, &RoomItem)> {
        self.items
            .iter()
            .flat_map(|item| {
                item.room_items
                    .iter()
                    .filter(move |ri| ri.room_id == room_id)
                    .map(move |ri| (item, ri))
            })
            .collect()
    }

    /// Flatten every item's per-room records into table rows.
    pub fn stock_rows(&self) -> Vec<StockRow> {
        self.items
            .iter()
            .flat_map(|item| {
                item.room_items.iter().map(move |ri| StockRow {
                    room_item_id: ri.id,
                    serial_num: item.serial_num.clone(),
                    item_name: item.item_name.clone(),
                    par_level: item.par_level,
                    room_name: ri
                        .room
                        .as_ref()
                        .map_or_else(|| "Room not found".to_owned(), |r| r.name.clone()),
                    quantity: ri.quantity,
                    uom: ri.uom.clone(),
                    expiry_date: ri.expiry_date.clone(),
                })
            })
            .collect()
    }
}
