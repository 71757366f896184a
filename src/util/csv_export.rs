//! CSV assembly for the dashboard report downloads.
//!
//! DESIGN
//! ======
//! The two reports are exported as spreadsheet-compatible CSV with the same
//! columns the backoffice spreadsheets use. Assembly is pure string work so
//! it tests natively; the actual browser download lives in `util::download`.

#[cfg(test)]
#[path = "csv_export_test.rs"]
mod csv_export_test;

use crate::net::types::{BelowParItem, ExpiringItem};
use crate::util::dates;

/// Filename for the near-expiry export.
pub const EXPIRY_FILENAME: &str = "short-expiry.csv";

/// Filename for the below-par export.
pub const BELOW_PAR_FILENAME: &str = "below-par.csv";

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

fn row(cells: &[String]) -> String {
    let mut line = cells
        .iter()
        .map(|c| field(c))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

/// Render the near-expiry report.
///
/// Columns: Serial No., Item Name, Room, Quantity, UOM, Exp Date.
pub fn expiring_items_csv(items: &[ExpiringItem]) -> String {
    let mut out = row(&[
        "Serial No.".to_owned(),
        "Item Name".to_owned(),
        "Room".to_owned(),
        "Quantity".to_owned(),
        "UOM".to_owned(),
        "Exp Date".to_owned(),
    ]);
    for item in items {
        out.push_str(&row(&[
            item.item.serial_num.clone(),
            item.item.item_name.clone(),
            item.room.name.clone(),
            item.quantity.to_string(),
            item.uom.clone(),
            dates::display_expiry(Some(&item.expiry_date)),
        ]));
    }
    out
}

/// Render the below-par report.
///
/// Columns: Serial No., Item Name, Par Level, Quantity.
pub fn below_par_csv(items: &[BelowParItem]) -> String {
    let mut out = row(&[
        "Serial No.".to_owned(),
        "Item Name".to_owned(),
        "Par Level".to_owned(),
        "Quantity".to_owned(),
    ]);
    for item in items {
        out.push_str(&row(&[
            item.serial_num.clone(),
            item.item_name.clone(),
            item.par_level.to_string(),
            item.item_total.to_string(),
        ]));
    }
    out
}
