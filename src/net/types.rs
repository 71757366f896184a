//! DTOs mirrored from backend response and request shapes.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend JSON so serde round-trips
//! stay lossless. The client enforces no invariants on them beyond form
//! validation; every record is an ephemeral copy refetched after mutations.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A registered building with its floorplan image and room layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: i64,
    pub name: String,
    /// Legacy rendering hint persisted alongside the image.
    pub image_size: String,
    /// Public URL of the floorplan image in object storage.
    pub building_img_url: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub users: Vec<BuildingUser>,
}

/// A room drawn on a building floorplan.
///
/// Geometry is stored as percentages of the rendered image so the overlay
/// stays correct at any display size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    /// Left edge as a percentage of the floorplan width.
    pub left: f64,
    /// Top edge as a percentage of the floorplan height.
    pub top: f64,
    /// Width as a percentage of the floorplan width.
    pub width: f64,
    /// Height as a percentage of the floorplan height.
    pub height: f64,
    pub building_id: i64,
}

/// A user's membership in a building, with an admin flag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingUser {
    pub id: i64,
    pub building_id: i64,
    pub user_id: i64,
    pub admin: bool,
}

/// Minimal room shape used by the form selects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: i64,
    pub name: String,
}

/// Name-only room reference embedded in stock rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomRef {
    pub name: String,
}

/// A catalog item with its per-room stock records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub serial_num: String,
    pub item_name: String,
    /// Minimum desired stock quantity.
    pub par_level: i64,
    #[serde(rename = "roomItems", default)]
    pub room_items: Vec<RoomItem>,
}

/// The association record linking an item to a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomItem {
    pub id: i64,
    pub room_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    /// Unit of measure (e.g. "box", "ea").
    pub uom: String,
    /// ISO-8601 expiry, absent for non-perishables.
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub room: Option<RoomRef>,
}

/// Item identity embedded in cart lines and expiry rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: i64,
    pub serial_num: String,
    pub item_name: String,
    pub par_level: i64,
}

/// A pending stock adjustment awaiting checkout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: i64,
    pub cart_id: i64,
    pub item_id: i64,
    pub room_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub item: ItemRef,
}

/// The user's open cycle-count cart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveCart {
    #[serde(rename = "cartLineItems", default)]
    pub cart_line_items: Vec<CartLineItem>,
}

/// A stock row from the near-expiry report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpiringItem {
    pub id: i64,
    pub room_id: i64,
    pub item_id: i64,
    pub quantity: i64,
    pub uom: String,
    pub expiry_date: String,
    pub item: ItemIdentity,
    pub room: RoomRef,
}

/// Serial + name pair embedded in report rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemIdentity {
    pub serial_num: String,
    pub item_name: String,
}

/// An item from the below-par report with its building-wide total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BelowParItem {
    pub id: i64,
    #[serde(rename = "itemTotal")]
    pub item_total: i64,
    pub item_name: String,
    pub par_level: i64,
    pub serial_num: String,
}

/// Near-expiry report envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpiryReport {
    pub count: u64,
    #[serde(default)]
    pub items: Vec<ExpiringItem>,
}

/// Below-par report envelope.
///
/// The backend wraps the count in a one-row aggregate (`[{"count": n}]`);
/// older responses send a bare number. Both forms deserialize to a plain
/// count here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BelowParReport {
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u64,
    #[serde(default)]
    pub items: Vec<BelowParItem>,
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct CountRow {
        #[serde(deserialize_with = "count_from_value")]
        count: u64,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountShape {
        Bare(u64),
        Rows(Vec<CountRow>),
    }

    match CountShape::deserialize(deserializer)? {
        CountShape::Bare(n) => Ok(n),
        CountShape::Rows(rows) => Ok(rows.first().map_or(0, |row| row.count)),
    }
}

// Aggregate counts arrive as numbers or numeric strings depending on the
// backend's SQL driver.
fn count_from_value<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

/// An authenticated user as resolved from the bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Payload for `POST /additemcart`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddCartItemPayload {
    #[serde(rename = "serialNum")]
    pub serial_num: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    pub quantity: u32,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    #[serde(rename = "roomSelect")]
    pub room_select: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Payload for `POST /addnewitem`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddNewItemPayload {
    #[serde(rename = "serialNum")]
    pub serial_num: String,
    #[serde(rename = "itemName")]
    pub item_name: String,
    pub quantity: u32,
    pub uom: String,
    pub par: u32,
    #[serde(rename = "expiryDate")]
    pub expiry_date: String,
    #[serde(rename = "roomSelect")]
    pub room_select: i64,
}

/// Payload for the two delete endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteItemPayload {
    #[serde(rename = "serialNum")]
    pub serial_num: String,
    #[serde(rename = "roomSelect")]
    pub room_select: i64,
}

/// A room as drawn during building creation, before it has an id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub building_id: i64,
}

/// Building fields for `POST /buildings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBuilding {
    pub name: String,
    pub image_size: String,
    pub building_img_url: String,
}

/// Payload for `POST /buildings`: the building plus its drawn rooms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBuildingPayload {
    pub building: NewBuilding,
    pub rooms: Vec<NewRoom>,
}

/// Payload for `POST /buildings/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddBuildingUserPayload {
    #[serde(rename = "buildingId")]
    pub building_id: i64,
    #[serde(rename = "newUserEmail")]
    pub new_user_email: String,
    pub admin: bool,
}

/// Generic mutation acknowledgement (`{"success": true}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
}
