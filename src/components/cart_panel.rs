//! Slide-over cart for pending cycle-count adjustments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening the panel fetches the active cart; checkout commits every line
//! via `PUT /checkoutcyclecount`; single lines can be removed beforehand.
//! Failures surface as toasts with the raw backend text, nothing is retried.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;

#[cfg(feature = "hydrate")]
fn open_cart(auth: RwSignal<AuthState>, cart: RwSignal<CartState>, toasts: RwSignal<ToastsState>) {
    let Some(token) = auth.get_untracked().token else {
        return;
    };
    cart.update(|c| c.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_active_cart(&token).await {
            Ok(active) => cart.update(|c| c.set_lines(active.cart_line_items)),
            Err(e) => {
                log::error!("cart fetch failed: {e}");
                cart.update(|c| c.loading = false);
                toasts.update(|t| {
                    t.error("Error getting cart", &e);
                });
            }
        }
    });
}

/// Cart trigger button plus the slide-over panel.
///
/// `on_checkout` lets the hosting page refetch its item data after a
/// successful commit.
#[component]
pub fn CartPanel(#[prop(optional)] on_checkout: Option<Callback<()>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cart = expect_context::<RwSignal<CartState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let on_open = move |_| {
        cart.update(|c| c.open = true);
        #[cfg(feature = "hydrate")]
        open_cart(auth, cart, toasts);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toasts);
        }
    };

    let on_close = move |_| cart.update(|c| c.open = false);

    let on_checkout_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::checkout_cycle_count(&token).await {
                    Ok(()) => {
                        cart.update(|c| {
                            c.clear();
                            c.open = false;
                        });
                        toasts.update(|t| {
                            t.success("Checkout success");
                        });
                        if let Some(cb) = on_checkout.as_ref() {
                            cb.run(());
                        }
                    }
                    Err(e) => {
                        log::error!("checkout failed: {e}");
                        toasts.update(|t| {
                            t.error("Error checking out", &e);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_checkout;
        }
    };

    let delete_line = move |line_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_cart_line(&token, line_id).await {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Item deleted");
                        });
                        open_cart(auth, cart, toasts);
                    }
                    Err(e) => {
                        log::error!("cart line delete failed: {e}");
                        toasts.update(|t| {
                            t.error("Error deleting item", &e);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = line_id;
        }
    };

    view! {
        <div class="cart">
            <button class="btn cart__trigger" on:click=on_open title="Open cart">
                "Cart"
                <Show when=move || !cart.get().is_empty()>
                    <span class="cart__count">{move || cart.get().len()}</span>
                </Show>
            </button>
            <Show when=move || cart.get().open>
                <div class="cart__backdrop" on:click=on_close>
                    <aside class="cart__panel" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Transactions"</h2>
                        <Show
                            when=move || !cart.get().loading
                            fallback=move || view! { <p>"Loading cart..."</p> }
                        >
                            <Show when=move || cart.get().is_empty()>
                                <p>"Your cart is empty."</p>
                            </Show>
                            <table class="cart__table">
                                <caption>"Check through each item before you checkout"</caption>
                                <thead>
                                    <tr>
                                        <th>"Item"</th>
                                        <th>"Room"</th>
                                        <th>"Quantity"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        cart.get()
                                            .line_items
                                            .into_iter()
                                            .map(|line| {
                                                let room_name = catalog
                                                    .get()
                                                    .room_name(line.room_id)
                                                    .unwrap_or("Room not found")
                                                    .to_owned();
                                                let line_id = line.id;
                                                view! {
                                                    <tr>
                                                        <td>{line.item.item_name}</td>
                                                        <td>{room_name}</td>
                                                        <td>{line.quantity}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--ghost"
                                                                on:click=move |_| delete_line(line_id)
                                                                aria-label="Remove line"
                                                            >
                                                                "Remove"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </tbody>
                            </table>
                        </Show>
                        <footer class="cart__footer">
                            <button class="btn" on:click=on_checkout_click>
                                "Checkout"
                            </button>
                        </footer>
                    </aside>
                </div>
            </Show>
        </div>
    }
}
