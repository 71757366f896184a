//! Form models and client-side validation for the stock workflows.
//!
//! DESIGN
//! ======
//! Inputs arrive as raw strings from the DOM; each form struct owns those raw
//! values plus a `validate` pass that yields per-field errors. Submission is
//! blocked while any error is present and errors render inline next to their
//! field. Numeric fields are coerced on access, mirroring how the original
//! schemas coerced before checking minimums.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::util::dates;
use chrono::NaiveDate;

/// A validation failure attached to a named form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_owned(),
        }
    }
}

/// Find the error message for `field`, if any.
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

fn require_text(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn require_min_number(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    raw: &str,
    min: u32,
    message: &str,
) {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= min => {}
        _ => errors.push(FieldError::new(field, message)),
    }
}

fn require_date(errors: &mut Vec<FieldError>, field: &'static str, raw: &str, message: &str) {
    if dates::parse_expiry(raw.trim()).is_none() {
        errors.push(FieldError::new(field, message));
    }
}

fn require_room(errors: &mut Vec<FieldError>, room_id: Option<i64>, message: &str) {
    match room_id {
        Some(id) if id >= 1 => {}
        _ => errors.push(FieldError::new("room_select", message)),
    }
}

fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Cycle-count entry: adjusts the recorded quantity of one item in one room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CycleCountForm {
    pub room_id: Option<i64>,
    pub serial_num: String,
    pub item_name: String,
    pub quantity: String,
    pub expiry_date: String,
}

impl CycleCountForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_room(&mut errors, self.room_id, "Please select a room to display.");
        require_text(
            &mut errors,
            "serial_num",
            &self.serial_num,
            "Serial number cannot be blank",
        );
        require_text(
            &mut errors,
            "item_name",
            &self.item_name,
            "Item name cannot be blank",
        );
        require_min_number(
            &mut errors,
            "quantity",
            &self.quantity,
            1,
            "Quantity cannot be blank",
        );
        require_date(
            &mut errors,
            "expiry_date",
            &self.expiry_date,
            "An expiry date is required.",
        );
        errors
    }

    pub fn quantity_value(&self) -> Option<u32> {
        parse_quantity(&self.quantity)
    }

    pub fn expiry_value(&self) -> Option<NaiveDate> {
        dates::parse_expiry(self.expiry_date.trim())
    }
}

/// New-item registration: item identity plus its initial per-room stock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddItemForm {
    pub room_id: Option<i64>,
    pub serial_num: String,
    pub item_name: String,
    pub quantity: String,
    pub uom: String,
    pub par: String,
    pub expiry_date: String,
}

impl AddItemForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_room(&mut errors, self.room_id, "Please select a room to display.");
        require_text(
            &mut errors,
            "serial_num",
            &self.serial_num,
            "Serial number cannot be blank",
        );
        require_text(
            &mut errors,
            "item_name",
            &self.item_name,
            "Item name cannot be blank",
        );
        require_min_number(
            &mut errors,
            "quantity",
            &self.quantity,
            1,
            "Quantity cannot be blank",
        );
        require_text(&mut errors, "uom", &self.uom, "UOM cannot be blank");
        require_min_number(&mut errors, "par", &self.par, 1, "Par level cannot be blank");
        require_date(
            &mut errors,
            "expiry_date",
            &self.expiry_date,
            "An expiry date is required.",
        );
        errors
    }

    pub fn quantity_value(&self) -> Option<u32> {
        parse_quantity(&self.quantity)
    }

    pub fn par_value(&self) -> Option<u32> {
        parse_quantity(&self.par)
    }

    pub fn expiry_value(&self) -> Option<NaiveDate> {
        dates::parse_expiry(self.expiry_date.trim())
    }
}

/// Which delete transaction the user picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteMode {
    /// Remove one item's stock record from one room.
    RoomItem,
    /// Remove the item everywhere, including its catalog entry.
    Everywhere,
}

/// Item deletion: a transaction type plus the identifying fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteItemForm {
    pub mode: Option<DeleteMode>,
    pub room_id: Option<i64>,
    pub serial_num: String,
    pub item_name: String,
    pub quantity: String,
    pub expiry_date: String,
}

impl DeleteItemForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.mode.is_none() {
            errors.push(FieldError::new(
                "mode",
                "You need to select a transaction type.",
            ));
        }
        require_text(
            &mut errors,
            "serial_num",
            &self.serial_num,
            "Serial number cannot be blank",
        );
        require_room(&mut errors, self.room_id, "Please select a room to display.");
        errors
    }

    /// Clear the prefilled fields when the transaction type changes.
    pub fn reset_details(&mut self) {
        self.serial_num.clear();
        self.item_name.clear();
        self.quantity.clear();
        self.expiry_date.clear();
    }
}
