//! All-items page: a flat table of every per-room stock row.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;
use crate::util::dates;

/// Every item's per-room stock, one table row per room item.
#[component]
pub fn AllItemsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if auth.get().is_authenticated() && catalog.get_untracked().items.is_empty() {
            super::load_catalog(auth, catalog, toasts);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts);

    view! {
        <div class="all-items-page">
            <h2>"All Items"</h2>
            {move || {
                let state = catalog.get();
                if let Some(e) = state.items_error {
                    return view! { <p>"Error loading items: " {e}</p> }.into_any();
                }
                if state.items_loading {
                    return view! { <p>"Loading items..."</p> }.into_any();
                }
                let rows = state.stock_rows();
                view! {
                    <table class="stock-table">
                        <thead>
                            <tr>
                                <th>"Serial No."</th>
                                <th>"Item Name"</th>
                                <th>"Par Level"</th>
                                <th>"Room"</th>
                                <th>"Quantity"</th>
                                <th>"UOM"</th>
                                <th>"Exp Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let expiry = dates::display_expiry(row.expiry_date.as_deref());
                                    let expiring = row
                                        .expiry_date
                                        .as_deref()
                                        .and_then(dates::parse_expiry)
                                        .is_some_and(|d| {
                                            dates::within_six_months(d, dates::today())
                                        });
                                    view! {
                                        <tr>
                                            <td>{row.serial_num}</td>
                                            <td>{row.item_name}</td>
                                            <td>{row.par_level}</td>
                                            <td>{row.room_name}</td>
                                            <td>{row.quantity}</td>
                                            <td>{row.uom}</td>
                                            <td class:stock-table__expiring=expiring>{expiry}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
