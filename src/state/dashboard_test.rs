use super::*;
use crate::net::types::BelowParItem;

// =============================================================
// select_building
// =============================================================

#[test]
fn select_building_resets_previous_reports() {
    let mut state = DashboardState::default();
    state.set_below_par(BelowParReport {
        count: 3,
        items: vec![BelowParItem {
            id: 7,
            item_total: 4,
            item_name: "Saline".to_owned(),
            par_level: 10,
            serial_num: "SN-1".to_owned(),
        }],
    });

    state.select_building(2);
    assert_eq!(state.building_id, Some(2));
    assert_eq!(state.below_par.count, 0);
    assert!(state.below_par.items.is_empty());
    assert_eq!(state.expiry.count, 0);
}

// =============================================================
// Report setters
// =============================================================

#[test]
fn set_expiry_clears_error() {
    let mut state = DashboardState {
        error: Some("boom".to_owned()),
        ..DashboardState::default()
    };
    state.set_expiry(ExpiryReport {
        count: 4,
        items: Vec::new(),
    });
    assert_eq!(state.expiry.count, 4);
    assert_eq!(state.error, None);
}

#[test]
fn default_dashboard_has_no_building() {
    let state = DashboardState::default();
    assert_eq!(state.building_id, None);
    assert_eq!(state.expiry.count, 0);
    assert_eq!(state.below_par.count, 0);
}
