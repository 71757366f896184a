use super::*;
use crate::net::types::{BelowParItem, ExpiringItem, ItemIdentity, RoomRef};

fn expiring(serial: &str, name: &str, room: &str, qty: i64, uom: &str, exp: &str) -> ExpiringItem {
    ExpiringItem {
        id: 1,
        room_id: 4,
        item_id: 7,
        quantity: qty,
        uom: uom.to_owned(),
        expiry_date: exp.to_owned(),
        item: ItemIdentity {
            serial_num: serial.to_owned(),
            item_name: name.to_owned(),
        },
        room: RoomRef {
            name: room.to_owned(),
        },
    }
}

// =============================================================
// expiring_items_csv
// =============================================================

#[test]
fn expiry_csv_has_header_when_empty() {
    let csv = expiring_items_csv(&[]);
    assert_eq!(csv, "Serial No.,Item Name,Room,Quantity,UOM,Exp Date\n");
}

#[test]
fn expiry_csv_renders_rows() {
    let items = vec![expiring("SN-1", "Saline", "Pharmacy", 3, "box", "2026-03-01")];
    let csv = expiring_items_csv(&items);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "SN-1,Saline,Pharmacy,3,box,01/03/2026");
}

#[test]
fn expiry_csv_unparseable_date_renders_na() {
    let items = vec![expiring("SN-1", "Saline", "Pharmacy", 3, "box", "unknown")];
    let csv = expiring_items_csv(&items);
    assert!(csv.lines().nth(1).unwrap().ends_with(",N/A"));
}

#[test]
fn expiry_csv_quotes_commas_in_names() {
    let items = vec![expiring("SN-1", "Saline, 500ml", "Pharmacy", 3, "box", "2026-03-01")];
    let csv = expiring_items_csv(&items);
    assert!(csv.contains("\"Saline, 500ml\""));
}

#[test]
fn expiry_csv_escapes_embedded_quotes() {
    let items = vec![expiring("SN-1", "4\" gauze", "Pharmacy", 3, "box", "2026-03-01")];
    let csv = expiring_items_csv(&items);
    assert!(csv.contains("\"4\"\" gauze\""));
}

// =============================================================
// below_par_csv
// =============================================================

#[test]
fn below_par_csv_has_header_when_empty() {
    assert_eq!(
        below_par_csv(&[]),
        "Serial No.,Item Name,Par Level,Quantity\n"
    );
}

#[test]
fn below_par_csv_renders_rows() {
    let items = vec![BelowParItem {
        id: 7,
        item_total: 4,
        item_name: "Saline".to_owned(),
        par_level: 10,
        serial_num: "SN-1".to_owned(),
    }];
    let csv = below_par_csv(&items);
    assert_eq!(csv.lines().nth(1), Some("SN-1,Saline,10,4"));
}

// =============================================================
// Filenames
// =============================================================

#[test]
fn export_filenames_are_csv() {
    assert!(EXPIRY_FILENAME.ends_with(".csv"));
    assert!(BELOW_PAR_FILENAME.ends_with(".csv"));
}
