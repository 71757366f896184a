//! Protected layout: sidebar navigation around an outlet for nested views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::components::toast_host::ToastHost;
use crate::state::auth::AuthState;
use crate::state::buildings::BuildingsState;
use crate::state::cart::CartState;
use crate::state::catalog::CatalogState;
use crate::state::dashboard::DashboardState;

/// Sidebar shell for every signed-in view.
///
/// Guards the nested routes: once the session bootstrap settles without a
/// user, the browser is sent back to the login page.
#[component]
pub fn MenuFrame() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let buildings = expect_context::<RwSignal<BuildingsState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let navigate = use_navigate();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let session = auth.get();
            if !session.loading && !session.is_authenticated() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let logout = move |_| {
        #[cfg(feature = "hydrate")]
        crate::util::persistence::clear_token();
        auth.update(AuthState::clear);
        buildings.set(BuildingsState::default());
        catalog.set(CatalogState::default());
        cart.set(CartState::default());
        dashboard.set(DashboardState::default());
        navigate("/", NavigateOptions::default());
    };

    let user_email = move || {
        auth.get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="frame">
            <aside class="frame__sidebar">
                <div class="frame__brand">"StockTrackr"</div>
                <nav class="frame__nav">
                    <A href="/landing/dashboard">"Dashboard"</A>
                    <A href="/landing/allitems">"All Items"</A>
                    <A href="/landing/manageitems">"Manage Items"</A>
                    <A href="/landing/buildings">"Buildings"</A>
                </nav>
            </aside>
            <div class="frame__body">
                <header class="frame__header">
                    <span class="frame__user">{user_email}</span>
                    <button class="btn btn--ghost" on:click=logout>
                        "Logout"
                    </button>
                </header>
                <main class="frame__main">
                    <Outlet/>
                </main>
            </div>
            <ToastHost/>
        </div>
    }
}
