use super::*;

// =============================================================
// Building / Room
// =============================================================

#[test]
fn building_deserializes_with_rooms_and_users() {
    let json = r#"{
        "id": 1,
        "name": "Main Clinic",
        "image_size": "200px",
        "building_img_url": "https://storage.example/buildings/main",
        "rooms": [
            {"id": 4, "name": "Pharmacy", "left": 10.5, "top": 20.0,
             "width": 15.0, "height": 12.5, "building_id": 1}
        ],
        "users": [
            {"id": 9, "building_id": 1, "user_id": 3, "admin": true}
        ]
    }"#;
    let building: Building = serde_json::from_str(json).unwrap();
    assert_eq!(building.name, "Main Clinic");
    assert_eq!(building.rooms.len(), 1);
    assert_eq!(building.rooms[0].left, 10.5);
    assert!(building.users[0].admin);
}

#[test]
fn building_tolerates_missing_collections() {
    let json = r#"{"id": 2, "name": "Annex", "image_size": "200px",
                   "building_img_url": "https://x/y"}"#;
    let building: Building = serde_json::from_str(json).unwrap();
    assert!(building.rooms.is_empty());
    assert!(building.users.is_empty());
}

// =============================================================
// Item / RoomItem
// =============================================================

#[test]
fn item_deserializes_room_items_under_camel_case_key() {
    let json = r#"{
        "id": 7, "serial_num": "SN-1", "item_name": "Saline", "par_level": 10,
        "roomItems": [
            {"id": 1, "room_id": 4, "item_id": 7, "quantity": 3, "uom": "box",
             "expiry_date": "2026-09-01T00:00:00.000Z", "room": {"name": "Pharmacy"}}
        ]
    }"#;
    let item: Item = serde_json::from_str(json).unwrap();
    assert_eq!(item.room_items.len(), 1);
    assert_eq!(item.room_items[0].room.as_ref().unwrap().name, "Pharmacy");
}

#[test]
fn room_item_expiry_is_optional() {
    let json = r#"{"id": 1, "room_id": 4, "item_id": 7, "quantity": 3, "uom": "ea"}"#;
    let row: RoomItem = serde_json::from_str(json).unwrap();
    assert_eq!(row.expiry_date, None);
    assert_eq!(row.room, None);
}

// =============================================================
// Cart
// =============================================================

#[test]
fn active_cart_deserializes_line_items() {
    let json = r#"{
        "cartLineItems": [
            {"id": 1, "cart_id": 5, "item_id": 7, "room_id": 4, "quantity": 2,
             "expiry_date": "2026-09-01",
             "item": {"id": 7, "serial_num": "SN-1", "item_name": "Saline", "par_level": 10}}
        ]
    }"#;
    let cart: ActiveCart = serde_json::from_str(json).unwrap();
    assert_eq!(cart.cart_line_items.len(), 1);
    assert_eq!(cart.cart_line_items[0].item.item_name, "Saline");
}

#[test]
fn active_cart_defaults_to_empty() {
    let cart: ActiveCart = serde_json::from_str("{}").unwrap();
    assert!(cart.cart_line_items.is_empty());
}

// =============================================================
// Report envelopes
// =============================================================

#[test]
fn expiry_report_deserializes() {
    let json = r#"{
        "count": 2,
        "items": [
            {"id": 1, "room_id": 4, "item_id": 7, "quantity": 3, "uom": "box",
             "expiry_date": "2026-03-01T00:00:00.000Z",
             "item": {"serial_num": "SN-1", "item_name": "Saline"},
             "room": {"name": "Pharmacy"}}
        ]
    }"#;
    let report: ExpiryReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.count, 2);
    assert_eq!(report.items[0].room.name, "Pharmacy");
}

#[test]
fn below_par_count_accepts_bare_number() {
    let json = r#"{"count": 3, "items": []}"#;
    let report: BelowParReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.count, 3);
}

#[test]
fn below_par_count_accepts_aggregate_rows() {
    let json = r#"{"count": [{"count": 5}], "items": []}"#;
    let report: BelowParReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.count, 5);
}

#[test]
fn below_par_count_accepts_stringly_aggregate() {
    let json = r#"{"count": [{"count": "8"}], "items": []}"#;
    let report: BelowParReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.count, 8);
}

#[test]
fn below_par_count_empty_rows_is_zero() {
    let json = r#"{"count": [], "items": []}"#;
    let report: BelowParReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.count, 0);
}

#[test]
fn below_par_item_reads_camel_case_total() {
    let json = r#"{"id": 7, "itemTotal": 4, "item_name": "Saline",
                   "par_level": 10, "serial_num": "SN-1"}"#;
    let item: BelowParItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.item_total, 4);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn add_cart_item_payload_serializes_camel_case_fields() {
    let payload = AddCartItemPayload {
        serial_num: "SN-1".to_owned(),
        item_name: "Saline".to_owned(),
        quantity: 2,
        expiry_date: "2026-09-01".to_owned(),
        room_select: 4,
        user_id: 3,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["serialNum"], "SN-1");
    assert_eq!(json["roomSelect"], 4);
    assert_eq!(json["userId"], 3);
}

#[test]
fn new_building_payload_nests_building_and_rooms() {
    let payload = NewBuildingPayload {
        building: NewBuilding {
            name: "Annex".to_owned(),
            image_size: "200px".to_owned(),
            building_img_url: "https://x/y".to_owned(),
        },
        rooms: vec![NewRoom {
            name: "Store".to_owned(),
            left: 1.0,
            top: 2.0,
            width: 3.0,
            height: 4.0,
            building_id: 0,
        }],
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["building"]["name"], "Annex");
    assert_eq!(json["rooms"][0]["width"], 3.0);
}

// The backend stores room geometry as flat left/top columns; the selection
// widget's corner pair must be unpacked before the room goes on the wire.
#[test]
fn new_room_serializes_flat_position_fields() {
    let room = NewRoom {
        name: "Store".to_owned(),
        left: 1.0,
        top: 2.0,
        width: 3.0,
        height: 4.0,
        building_id: 0,
    };
    let json = serde_json::to_value(&room).unwrap();
    assert_eq!(json["left"], 1.0);
    assert_eq!(json["top"], 2.0);
    assert_eq!(json["building_id"], 0);
    assert!(json.get("topLeft").is_none());
}

#[test]
fn add_building_user_payload_serializes_camel_case_fields() {
    let payload = AddBuildingUserPayload {
        building_id: 1,
        new_user_email: "crew@example.com".to_owned(),
        admin: false,
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["buildingId"], 1);
    assert_eq!(json["newUserEmail"], "crew@example.com");
}

#[test]
fn ack_defaults_success_false() {
    let ack: Ack = serde_json::from_str("{}").unwrap();
    assert!(!ack.success);
}
