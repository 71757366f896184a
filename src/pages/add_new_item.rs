//! Add-new-item tab: register an item and its initial per-room stock.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;
use crate::util::forms::{AddItemForm, FieldError, message_for};

/// Item-registration form. Serial lookup prefills the catalog fields for
/// items already stocked in another room.
#[component]
pub fn AddNewItemTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts);

    let form = RwSignal::new(AddItemForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let error_for = move |field: &'static str| {
        move || message_for(&errors.get(), field).map(ToOwned::to_owned)
    };

    let on_serial = move |ev: leptos::ev::Event| {
        let serial = event_target_value(&ev);
        form.update(|f| f.serial_num = serial.clone());
        #[cfg(feature = "hydrate")]
        {
            let room_id = form.get_untracked().room_id.unwrap_or(1);
            super::lookup_serial(auth, serial, room_id, move |found| {
                form.update(|f| {
                    f.item_name = found.item_name;
                    f.uom = found.uom;
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
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let (Some(quantity), Some(par), Some(room_id), Some(expiry)) = (
                current.quantity_value(),
                current.par_value(),
                current.room_id,
                current.expiry_value(),
            ) else {
                return;
            };
            let payload = crate::net::types::AddNewItemPayload {
                serial_num: current.serial_num,
                item_name: current.item_name,
                quantity,
                uom: current.uom,
                par,
                expiry_date: expiry.format("%Y-%m-%d").to_string(),
                room_select: room_id,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::add_new_item(&token, &payload).await {
                    Ok(ack) => {
                        if ack.success {
                            form.set(AddItemForm::default());
                        }
                        toasts.update(|t| {
                            t.success("Item added");
                        });
                        super::load_catalog(auth, catalog, toasts);
                    }
                    Err(e) => {
                        log::error!("add item failed: {e}");
                        toasts.update(|t| {
                            t.error("Failed", &e);
                        });
                    }
                }
            });
        }
    };

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
                    "Item Name"
                    <input
                        type="text"
                        placeholder="Type here"
                        prop:value=move || form.get().item_name
                        on:input=move |ev| {
                            form.update(|f| f.item_name = event_target_value(&ev));
                        }
                    />
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
                    "UOM"
                    <input
                        type="text"
                        placeholder="Unit of measure"
                        prop:value=move || form.get().uom
                        on:input=move |ev| {
                            form.update(|f| f.uom = event_target_value(&ev));
                        }
                    />
                    <span class="stock-form__error">{error_for("uom")}</span>
                </label>
                <label>
                    "Par Level"
                    <input
                        type="number"
                        placeholder="Type here"
                        prop:value=move || form.get().par
                        on:input=move |ev| {
                            form.update(|f| f.par = event_target_value(&ev));
                        }
                    />
                    <span class="stock-form__hint">"Overall par level."</span>
                    <span class="stock-form__error">{error_for("par")}</span>
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
                "Add item"
            </button>
        </div>
    }
}
