//! Compile-time deployment configuration.
//!
//! DESIGN
//! ======
//! The client is a static bundle, so all deployment knobs are baked in at
//! build time via `option_env!` with development defaults. No value here is
//! secret: the identity-provider client id and audience are public SPA
//! configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the inventory backend API.
pub fn backend_url() -> &'static str {
    option_env!("STOCKTRACKR_BACKEND_URL").unwrap_or("/api")
}

/// Base URL of the object-storage service holding floorplan images.
pub fn storage_url() -> &'static str {
    option_env!("STOCKTRACKR_STORAGE_URL").unwrap_or("/storage")
}

/// Identity provider tenant domain.
pub fn auth_domain() -> &'static str {
    option_env!("STOCKTRACKR_AUTH_DOMAIN").unwrap_or("stocktrackr.example.auth0.com")
}

/// Identity provider SPA client id.
pub fn auth_client_id() -> &'static str {
    option_env!("STOCKTRACKR_AUTH_CLIENT_ID").unwrap_or("stocktrackr-spa")
}

/// API audience requested with every token.
pub fn auth_audience() -> &'static str {
    option_env!("STOCKTRACKR_AUTH_AUDIENCE").unwrap_or("stocktrackr-api")
}

/// OAuth scopes requested at login.
pub fn auth_scope() -> &'static str {
    "openid profile email"
}
