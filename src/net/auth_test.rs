use super::*;

// =============================================================
// authorize_url
// =============================================================

#[test]
fn authorize_url_targets_provider_domain() {
    let url = authorize_url("https://app.example.com");
    assert!(url.starts_with("https://"));
    assert!(url.contains("/authorize?"));
    assert!(url.contains("response_type=token"));
}

#[test]
fn authorize_url_escapes_redirect_uri() {
    let url = authorize_url("https://app.example.com/cb");
    assert!(url.contains("redirect_uri=https%3A%2F%2Fapp.example.com%2Fcb"));
}

#[test]
fn authorize_url_escapes_scope_spaces() {
    let url = authorize_url("https://app.example.com");
    assert!(url.contains("scope=openid%20profile%20email"));
}

// =============================================================
// parse_fragment_token
// =============================================================

#[test]
fn parse_fragment_token_reads_access_token() {
    let fragment = "#access_token=abc123&token_type=Bearer&expires_in=7200";
    assert_eq!(parse_fragment_token(fragment), Some("abc123".to_owned()));
}

#[test]
fn parse_fragment_token_accepts_missing_hash_prefix() {
    assert_eq!(
        parse_fragment_token("access_token=tok"),
        Some("tok".to_owned())
    );
}

#[test]
fn parse_fragment_token_token_not_first_param() {
    let fragment = "#token_type=Bearer&access_token=zzz";
    assert_eq!(parse_fragment_token(fragment), Some("zzz".to_owned()));
}

#[test]
fn parse_fragment_token_empty_value_is_none() {
    assert_eq!(parse_fragment_token("#access_token="), None);
}

#[test]
fn parse_fragment_token_absent_is_none() {
    assert_eq!(parse_fragment_token("#state=xyz&token_type=Bearer"), None);
    assert_eq!(parse_fragment_token(""), None);
}
