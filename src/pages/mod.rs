//! Routed pages: login, the protected layout, and its nested views.

pub mod add_new_item;
pub mod all_items;
pub mod buildings;
pub mod cycle_count;
pub mod dashboard;
pub mod delete_item;
pub mod login;
pub mod manage_items;
pub mod menu_frame;
pub mod room;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::buildings::BuildingsState;
#[cfg(feature = "hydrate")]
use crate::state::catalog::CatalogState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::ToastsState;

/// Catalog fields prefilled from a `findserial` lookup.
#[cfg(feature = "hydrate")]
pub(crate) struct SerialPrefill {
    pub item_name: String,
    pub quantity: i64,
    pub uom: String,
    /// Expiry as `YYYY-MM-DD`, ready for a date input.
    pub expiry_iso: Option<String>,
}

/// Look up a serial in a room and hand the first stock record to `apply`.
///
/// Lookup misses are expected while the user is still typing, so failures
/// are only logged.
#[cfg(feature = "hydrate")]
pub(crate) fn lookup_serial(
    auth: RwSignal<AuthState>,
    serial: String,
    room_id: i64,
    apply: impl FnOnce(SerialPrefill) + 'static,
) {
    let Some(token) = auth.get_untracked().token else {
        return;
    };
    leptos::task::spawn_local(async move {
        match crate::net::api::find_serial(&token, &serial, room_id).await {
            Ok(item) => {
                let Some(stock) = item.room_items.first() else {
                    return;
                };
                apply(SerialPrefill {
                    item_name: item.item_name,
                    quantity: stock.quantity,
                    uom: stock.uom.clone(),
                    expiry_iso: stock
                        .expiry_date
                        .as_deref()
                        .and_then(crate::util::dates::parse_expiry)
                        .map(|d| d.format("%Y-%m-%d").to_string()),
                });
            }
            Err(e) => log::error!("serial lookup failed: {e}"),
        }
    });
}

/// Refresh the building list for the signed-in user.
#[cfg(feature = "hydrate")]
pub(crate) fn load_buildings(
    auth: RwSignal<AuthState>,
    buildings: RwSignal<BuildingsState>,
    toasts: RwSignal<ToastsState>,
) {
    let session = auth.get_untracked();
    let (Some(token), Some(user_id)) = (session.token, session.user_id()) else {
        return;
    };
    buildings.update(|b| b.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_buildings(&token, user_id).await {
            Ok(items) => buildings.update(|b| b.set_items(items)),
            Err(e) => {
                log::error!("building fetch failed: {e}");
                buildings.update(|b| {
                    b.loading = false;
                    b.error = Some(e.clone());
                });
                toasts.update(|t| {
                    t.error("Error getting buildings", &e);
                });
            }
        }
    });
}

/// Refresh the room and item catalogs backing the stock views and forms.
#[cfg(feature = "hydrate")]
pub(crate) fn load_catalog(
    auth: RwSignal<AuthState>,
    catalog: RwSignal<CatalogState>,
    toasts: RwSignal<ToastsState>,
) {
    let session = auth.get_untracked();
    let (Some(token), Some(user_id)) = (session.token, session.user_id()) else {
        return;
    };
    catalog.update(|c| {
        c.rooms_loading = true;
        c.items_loading = true;
    });
    let rooms_token = token.clone();
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_rooms(&rooms_token, user_id).await {
            Ok(rooms) => catalog.update(|c| c.set_rooms(rooms)),
            Err(e) => {
                log::error!("room fetch failed: {e}");
                catalog.update(|c| {
                    c.rooms_loading = false;
                    c.rooms_error = Some(e.clone());
                });
                toasts.update(|t| {
                    t.error("Error getting rooms", &e);
                });
            }
        }
    });
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_all_items(&token, user_id).await {
            Ok(items) => catalog.update(|c| c.set_items(items)),
            Err(e) => {
                log::error!("item fetch failed: {e}");
                catalog.update(|c| {
                    c.items_loading = false;
                    c.items_error = Some(e.clone());
                });
                toasts.update(|t| {
                    t.error("Error getting items", &e);
                });
            }
        }
    });
}
