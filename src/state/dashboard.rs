//! Dashboard state: building selection and the two stock reports.
//!
//! DESIGN
//! ======
//! Reports are keyed by the selected building and refetched whenever the
//! selection changes. Counts come from the backend; the client never derives
//! them from the item lists.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{BelowParReport, ExpiryReport};

/// Shared dashboard state.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    /// Id of the building the reports describe, if one is selected.
    pub building_id: Option<i64>,
    pub expiry: ExpiryReport,
    pub below_par: BelowParReport,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    /// Switch buildings and drop the previous building's reports.
    pub fn select_building(&mut self, building_id: i64) {
        self.building_id = Some(building_id);
        self.expiry = ExpiryReport::default();
        self.below_par = BelowParReport::default();
        self.error = None;
    }

    pub fn set_expiry(&mut self, report: ExpiryReport) {
        self.expiry = report;
        self.error = None;
    }

    pub fn set_below_par(&mut self, report: BelowParReport) {
        self.below_par = report;
        self.error = None;
    }
}
