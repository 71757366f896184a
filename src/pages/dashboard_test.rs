use super::*;

#[test]
fn empty_report_message_prompts_for_building_first() {
    assert_eq!(
        empty_report_message(false, ReportKind::BelowPar),
        "Please select a building to continue."
    );
    assert_eq!(
        empty_report_message(false, ReportKind::Expiry),
        "Please select a building to continue."
    );
}

#[test]
fn empty_report_message_names_the_report_once_a_building_is_picked() {
    assert_eq!(
        empty_report_message(true, ReportKind::BelowPar),
        "You have no items reaching par."
    );
    assert_eq!(
        empty_report_message(true, ReportKind::Expiry),
        "You have no expiring items."
    );
}
