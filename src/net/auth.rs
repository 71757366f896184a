//! Identity-provider glue for the hosted-login flow.
//!
//! DESIGN
//! ======
//! Authentication is delegated to a third-party provider: the client builds
//! the authorize URL, navigates away, and on return extracts the bearer token
//! from the URL fragment. Token resolution to a user record happens in
//! `net::api`. URL assembly and fragment parsing are pure so they test
//! without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config;

/// Build the provider authorize URL for the implicit SPA flow.
pub fn authorize_url(redirect_uri: &str) -> String {
    format!(
        "https://{}/authorize?response_type=token&client_id={}&redirect_uri={}&audience={}&scope={}",
        config::auth_domain(),
        config::auth_client_id(),
        encode_query(redirect_uri),
        encode_query(config::auth_audience()),
        encode_query(config::auth_scope()),
    )
}

/// Extract `access_token` from an implicit-flow return fragment.
///
/// Accepts the fragment with or without its leading `#`. Returns `None` when
/// no token parameter is present or the parameter is empty.
pub fn parse_fragment_token(fragment: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key == "access_token" && !value.is_empty() {
            return Some(value.to_owned());
        }
    }
    None
}

// Minimal query-component escaping for the handful of characters that appear
// in redirect URIs and scope lists.
fn encode_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            ':' => out.push_str("%3A"),
            '/' => out.push_str("%2F"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            _ => out.push(ch),
        }
    }
    out
}

/// Navigate the browser to the provider's hosted login page.
pub fn begin_login() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(origin) = window.location().origin() else {
            return;
        };
        let _ = window.location().set_href(&authorize_url(&origin));
    }
}

/// Read a freshly issued token from the current URL fragment, if present,
/// and strip the fragment so the token never lingers in the address bar.
pub fn take_token_from_location() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let hash = window.location().hash().ok()?;
        let token = parse_fragment_token(&hash)?;
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(window.location().pathname().ok()?.as_str()),
            );
        }
        Some(token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
