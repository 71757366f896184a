//! Manage-items page hosting the three stock workflows as tabs.

use leptos::prelude::*;

use crate::pages::add_new_item::AddNewItemTab;
use crate::pages::cycle_count::CycleCountTab;
use crate::pages::delete_item::DeleteItemTab;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    CycleCount,
    AddNewItem,
    DeleteItem,
}

/// Tab strip switching between cycle count, add item, and delete item.
#[component]
pub fn ManageItemsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    // The forms all need the room and item catalogs.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if auth.get().is_authenticated() && catalog.get_untracked().items.is_empty() {
            super::load_catalog(auth, catalog, toasts);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, catalog, toasts);

    let tab = RwSignal::new(Tab::default());

    view! {
        <div class="manage-page">
            <nav class="manage-page__tabs">
                <button
                    class="tab"
                    class:tab--active=move || tab.get() == Tab::CycleCount
                    on:click=move |_| tab.set(Tab::CycleCount)
                >
                    "Cycle Count"
                </button>
                <button
                    class="tab"
                    class:tab--active=move || tab.get() == Tab::AddNewItem
                    on:click=move |_| tab.set(Tab::AddNewItem)
                >
                    "Add New Item"
                </button>
                <button
                    class="tab"
                    class:tab--active=move || tab.get() == Tab::DeleteItem
                    on:click=move |_| tab.set(Tab::DeleteItem)
                >
                    "Delete Item"
                </button>
            </nav>
            {move || match tab.get() {
                Tab::CycleCount => view! { <CycleCountTab/> }.into_any(),
                Tab::AddNewItem => view! { <AddNewItemTab/> }.into_any(),
                Tab::DeleteItem => view! { <DeleteItemTab/> }.into_any(),
            }}
        </div>
    }
}
