use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn backend_url_has_default() {
    assert!(!backend_url().is_empty());
}

#[test]
fn storage_url_has_default() {
    assert!(!storage_url().is_empty());
}

#[test]
fn auth_settings_have_defaults() {
    assert!(!auth_domain().is_empty());
    assert!(!auth_client_id().is_empty());
    assert!(!auth_audience().is_empty());
}

#[test]
fn auth_scope_requests_profile_and_email() {
    let scope = auth_scope();
    assert!(scope.contains("openid"));
    assert!(scope.contains("email"));
}
