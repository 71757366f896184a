//! Login page with the identity-provider redirect button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Marketing panel plus the provider login button.
///
/// A resolved session skips the page entirely and lands on the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.get().is_authenticated() {
            navigate("/landing/dashboard", NavigateOptions::default());
        }
    });

    let on_login = move |_| {
        #[cfg(feature = "hydrate")]
        crate::net::auth::begin_login();
    };

    view! {
        <div class="login-page">
            <button class="btn login-page__cta" on:click=on_login>
                "Login / Signup"
            </button>
            <div class="login-page__panel">
                <div class="login-page__brand">"StockTrackr"</div>
                <blockquote class="login-page__quote">
                    <p>
                        "\u{201c}As a small business owner, keeping track of inventory was always a headache. With StockTrackr, I can easily manage stock levels, track product movements, and generate reports with just a few clicks. It has saved me countless hours of manual work and helped streamline our operations.\u{201d}"
                    </p>
                    <footer>"Sofia Davis"</footer>
                </blockquote>
            </div>
            <div class="login-page__intro">
                <h1>"Try it!"</h1>
                <p>"Click the button on the top right to begin"</p>
            </div>
        </div>
    }
}
