use super::*;

fn valid_cycle_count() -> CycleCountForm {
    CycleCountForm {
        room_id: Some(2),
        serial_num: "SN-100".to_owned(),
        item_name: "Saline 500ml".to_owned(),
        quantity: "4".to_owned(),
        expiry_date: "2026-09-01".to_owned(),
    }
}

fn valid_add_item() -> AddItemForm {
    AddItemForm {
        room_id: Some(1),
        serial_num: "SN-200".to_owned(),
        item_name: "Gauze".to_owned(),
        quantity: "10".to_owned(),
        uom: "box".to_owned(),
        par: "5".to_owned(),
        expiry_date: "2027-01-01".to_owned(),
    }
}

// =============================================================
// CycleCountForm
// =============================================================

#[test]
fn cycle_count_valid_form_passes() {
    assert!(valid_cycle_count().validate().is_empty());
}

#[test]
fn cycle_count_requires_room() {
    let mut form = valid_cycle_count();
    form.room_id = None;
    let errors = form.validate();
    assert!(message_for(&errors, "room_select").is_some());
}

#[test]
fn cycle_count_rejects_room_zero() {
    let mut form = valid_cycle_count();
    form.room_id = Some(0);
    assert!(message_for(&form.validate(), "room_select").is_some());
}

#[test]
fn cycle_count_requires_serial() {
    let mut form = valid_cycle_count();
    form.serial_num = "   ".to_owned();
    let errors = form.validate();
    assert_eq!(
        message_for(&errors, "serial_num"),
        Some("Serial number cannot be blank")
    );
}

#[test]
fn cycle_count_quantity_must_be_at_least_one() {
    let mut form = valid_cycle_count();
    form.quantity = "0".to_owned();
    assert!(message_for(&form.validate(), "quantity").is_some());

    form.quantity = "abc".to_owned();
    assert!(message_for(&form.validate(), "quantity").is_some());

    form.quantity = String::new();
    assert!(message_for(&form.validate(), "quantity").is_some());
}

#[test]
fn cycle_count_requires_parseable_expiry() {
    let mut form = valid_cycle_count();
    form.expiry_date = "soon".to_owned();
    assert!(message_for(&form.validate(), "expiry_date").is_some());
}

#[test]
fn cycle_count_exposes_coerced_values() {
    let form = valid_cycle_count();
    assert_eq!(form.quantity_value(), Some(4));
    assert!(form.expiry_value().is_some());
}

#[test]
fn cycle_count_collects_all_errors() {
    let form = CycleCountForm::default();
    let errors = form.validate();
    assert_eq!(errors.len(), 5);
}

// =============================================================
// AddItemForm
// =============================================================

#[test]
fn add_item_valid_form_passes() {
    assert!(valid_add_item().validate().is_empty());
}

#[test]
fn add_item_requires_uom() {
    let mut form = valid_add_item();
    form.uom = String::new();
    assert_eq!(
        message_for(&form.validate(), "uom"),
        Some("UOM cannot be blank")
    );
}

#[test]
fn add_item_par_must_be_at_least_one() {
    let mut form = valid_add_item();
    form.par = "0".to_owned();
    assert!(message_for(&form.validate(), "par").is_some());
}

#[test]
fn add_item_exposes_coerced_values() {
    let form = valid_add_item();
    assert_eq!(form.quantity_value(), Some(10));
    assert_eq!(form.par_value(), Some(5));
}

// =============================================================
// DeleteItemForm
// =============================================================

#[test]
fn delete_item_requires_mode() {
    let form = DeleteItemForm {
        room_id: Some(1),
        serial_num: "SN-1".to_owned(),
        ..DeleteItemForm::default()
    };
    assert_eq!(
        message_for(&form.validate(), "mode"),
        Some("You need to select a transaction type.")
    );
}

#[test]
fn delete_item_valid_form_passes() {
    let form = DeleteItemForm {
        mode: Some(DeleteMode::RoomItem),
        room_id: Some(3),
        serial_num: "SN-1".to_owned(),
        ..DeleteItemForm::default()
    };
    assert!(form.validate().is_empty());
}

#[test]
fn delete_item_reset_clears_prefilled_fields() {
    let mut form = DeleteItemForm {
        mode: Some(DeleteMode::Everywhere),
        room_id: Some(3),
        serial_num: "SN-1".to_owned(),
        item_name: "Gauze".to_owned(),
        quantity: "2".to_owned(),
        expiry_date: "2026-01-01".to_owned(),
    };
    form.reset_details();
    assert!(form.serial_num.is_empty());
    assert!(form.item_name.is_empty());
    assert!(form.quantity.is_empty());
    assert!(form.expiry_date.is_empty());
    // Mode and room survive the reset.
    assert_eq!(form.mode, Some(DeleteMode::Everywhere));
    assert_eq!(form.room_id, Some(3));
}

// =============================================================
// message_for
// =============================================================

#[test]
fn message_for_missing_field_is_none() {
    let errors = valid_cycle_count().validate();
    assert_eq!(message_for(&errors, "quantity"), None);
}
