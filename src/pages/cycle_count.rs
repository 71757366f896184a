//! Cycle-count tab: queue per-room quantity adjustments into the cart.

use leptos::prelude::*;

use crate::components::cart_panel::CartPanel;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;
use crate::util::forms::{CycleCountForm, FieldError, message_for};

/// Two-step cycle-count form plus the cart panel.
///
/// Typing or scanning a serial prefills the item's current stock record so
/// the user only corrects the counted quantity.
#[component]
pub fn CycleCountTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts);

    let form = RwSignal::new(CycleCountForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let error_for = move |field: &'static str| {
        move || message_for(&errors.get(), field).map(ToOwned::to_owned)
    };

    let prefill = move |serial: String| {
        #[cfg(feature = "hydrate")]
        {
            let room_id = form.get_untracked().room_id.unwrap_or(1);
            super::lookup_serial(auth, serial, room_id, move |found| {
                form.update(|f| {
                    f.item_name = found.item_name;
                    f.quantity = found.quantity.to_string();
                    f.expiry_date = found.expiry_iso.unwrap_or_default();
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = serial;
        }
    };

    let on_room = move |ev: leptos::ev::Event| {
        let room_id = event_target_value(&ev).parse::<i64>().ok();
        form.update(|f| f.room_id = room_id);
    };

    let on_serial = move |ev: leptos::ev::Event| {
        let serial = event_target_value(&ev);
        form.update(|f| f.serial_num = serial.clone());
        prefill(serial);
    };

    let on_item = move |ev: leptos::ev::Event| {
        let serial = event_target_value(&ev);
        form.update(|f| f.serial_num = serial.clone());
        prefill(serial);
    };

    let submit = move |_| {
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        #[cfg(feature = "hydrate")]
        {
            let session = auth.get_untracked();
            let (Some(token), Some(user_id)) = (session.token, session.user_id()) else {
                return;
            };
            let (Some(quantity), Some(room_id), Some(expiry)) =
                (current.quantity_value(), current.room_id, current.expiry_value())
            else {
                return;
            };
            let payload = crate::net::types::AddCartItemPayload {
                serial_num: current.serial_num,
                item_name: current.item_name,
                quantity,
                expiry_date: expiry.format("%Y-%m-%d").to_string(),
                room_select: room_id,
                user_id,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::add_item_to_cart(&token, &payload).await {
                    Ok(()) => {
                        form.set(CycleCountForm::default());
                        toasts.update(|t| {
                            t.success("Item added to cart");
                        });
                    }
                    Err(e) => {
                        log::error!("add to cart failed: {e}");
                        toasts.update(|t| {
                            t.error("Failed", &e);
                        });
                    }
                }
            });
        }
    };

    let on_checkout = Callback::new(move |()| {
        form.set(CycleCountForm::default());
        errors.set(Vec::new());
        #[cfg(feature = "hydrate")]
        super::load_catalog(auth, catalog, toasts);
    });

    view! {
        <div class="stock-form">
            <h3>"Step 1"</h3>
            <div class="stock-form__row">
                <label>
                    "Select Room"
                    <select on:change=on_room>
                        <option value="" selected=move || form.get().room_id.is_none()>
                            "Select a room to display"
                        </option>
                        {move || {
                            catalog
                                .get()
                                .rooms
                                .into_iter()
                                .map(|room| {
                                    view! {
                                        <option value=room.id.to_string()>{room.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <span class="stock-form__hint">"Select the room that the item belong to."</span>
                    <span class="stock-form__error">{error_for("room_select")}</span>
                </label>
                <label>
                    "Serial Number"
                    <input
                        type="text"
                        placeholder="Type or scan here"
                        prop:value=move || form.get().serial_num
                        on:input=on_serial
                    />
                    <span class="stock-form__hint">"Type or scan the serial number."</span>
                    <span class="stock-form__error">{error_for("serial_num")}</span>
                </label>
            </div>
            <h3>"Step 2"</h3>
            <div class="stock-form__row">
                <label>
                    "Select Item"
                    <select on:change=on_item>
                        <option value="">"Select an item to display"</option>
                        {move || {
                            catalog
                                .get()
                                .items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <option value=item.serial_num>{item.item_name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                    <span class="stock-form__hint">"Select the item that you want to transact."</span>
                    <span class="stock-form__error">{error_for("item_name")}</span>
                </label>
                <label>
                    "Quantity"
                    <input
                        type="number"
                        placeholder="Type here"
                        prop:value=move || form.get().quantity
                        on:input=move |ev| {
                            form.update(|f| f.quantity = event_target_value(&ev));
                        }
                    />
                    <span class="stock-form__hint">"Quantity of item in location."</span>
                    <span class="stock-form__error">{error_for("quantity")}</span>
                </label>
                <label>
                    "Expiry Date"
                    <input
                        type="date"
                        prop:value=move || form.get().expiry_date
                        on:input=move |ev| {
                            form.update(|f| f.expiry_date = event_target_value(&ev));
                        }
                    />
                    <span class="stock-form__hint">"Pick the earliest expiry date of the lot."</span>
                    <span class="stock-form__error">{error_for("expiry_date")}</span>
                </label>
            </div>
            <button class="btn" on:click=submit>
                "Add to cart"
            </button>
            <CartPanel on_checkout=on_checkout/>
        </div>
    }
}
