//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::all_items::AllItemsPage;
use crate::pages::buildings::BuildingsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::manage_items::ManageItemsPage;
use crate::pages::menu_frame::MenuFrame;
use crate::state::auth::AuthState;
use crate::state::buildings::BuildingsState;
use crate::state::cart::CartState;
use crate::state::catalog::CatalogState;
use crate::state::dashboard::DashboardState;
use crate::state::toasts::ToastsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the session: a fresh token from the login redirect wins over the
/// cached one, and either must resolve to a user before it counts.
#[cfg(feature = "hydrate")]
fn bootstrap_session(auth: RwSignal<AuthState>) {
    let token = crate::net::auth::take_token_from_location()
        .inspect(|t| crate::util::persistence::save_token(t))
        .or_else(crate::util::persistence::load_token);
    let Some(token) = token else {
        auth.update(|a| a.loading = false);
        return;
    };
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user(&token).await {
            Some(user) => {
                auth.set(AuthState {
                    token: Some(token),
                    user: Some(user),
                    loading: false,
                });
            }
            None => {
                crate::util::persistence::clear_token();
                auth.update(|a| a.loading = false);
            }
        }
    });
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState {
        loading: true,
        ..AuthState::default()
    });
    let buildings = RwSignal::new(BuildingsState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let cart = RwSignal::new(CartState::default());
    let dashboard = RwSignal::new(DashboardState::default());
    let toasts = RwSignal::new(ToastsState::default());

    provide_context(auth);
    provide_context(buildings);
    provide_context(catalog);
    provide_context(cart);
    provide_context(dashboard);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    bootstrap_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/stocktrackr.css"/>
        <Title text="StockTrackr"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <ParentRoute path=StaticSegment("landing") view=MenuFrame>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("buildings") view=BuildingsPage/>
                    <Route path=StaticSegment("allitems") view=AllItemsPage/>
                    <Route path=StaticSegment("manageitems") view=ManageItemsPage/>
                    // The original app defaulted /landing to the items table.
                    <Route path=StaticSegment("") view=AllItemsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
