//! Delete-item tab: remove stock from one room or retire an item entirely.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;
use crate::util::forms::{DeleteItemForm, DeleteMode, FieldError, message_for};

/// Deletion form with a transaction-type radio.
///
/// Switching the transaction type clears the serial and the prefilled
/// details so stale values never ride along into the other endpoint.
#[component]
pub fn DeleteItemTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, toasts);

    let form = RwSignal::new(DeleteItemForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let error_for = move |field: &'static str| {
        move || message_for(&errors.get(), field).map(ToOwned::to_owned)
    };

    let pick_mode = move |mode: DeleteMode| {
        form.update(|f| {
            f.mode = Some(mode);
            f.reset_details();
        });
    };

    let on_room = move |ev: leptos::ev::Event| {
        let room_id = event_target_value(&ev).parse::<i64>().ok();
        form.update(|f| f.room_id = room_id);
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
            let (Some(mode), Some(room_id)) = (current.mode, current.room_id) else {
                return;
            };
            let payload = crate::net::types::DeleteItemPayload {
                serial_num: current.serial_num,
                room_select: room_id,
            };
            leptos::task::spawn_local(async move {
                let result = match mode {
                    DeleteMode::RoomItem => {
                        crate::net::api::delete_room_item(&token, &payload).await
                    }
                    DeleteMode::Everywhere => crate::net::api::delete_item(&token, &payload).await,
                };
                match result {
                    Ok(ack) => {
                        if ack.success {
                            form.set(DeleteItemForm::default());
                        }
                        toasts.update(|t| {
                            t.success("Item deleted");
                        });
                        super::load_catalog(auth, catalog, toasts);
                    }
                    Err(e) => {
                        log::error!("delete failed: {e}");
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
            <fieldset class="stock-form__radio">
                <legend>"Choose transaction type..."</legend>
                <label>
                    <input
                        type="radio"
                        name="delete-mode"
                        prop:checked=move || form.get().mode == Some(DeleteMode::RoomItem)
                        on:change=move |_| pick_mode(DeleteMode::RoomItem)
                    />
                    "Delete item from one room"
                </label>
                <label>
                    <input
                        type="radio"
                        name="delete-mode"
                        prop:checked=move || form.get().mode == Some(DeleteMode::Everywhere)
                        on:change=move |_| pick_mode(DeleteMode::Everywhere)
                    />
                    "Delete item from all rooms"
                </label>
                <span class="stock-form__error">{error_for("mode")}</span>
            </fieldset>
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
                    <input type="text" readonly prop:value=move || form.get().item_name/>
                </label>
                <label>
                    "Quantity"
                    <input type="number" readonly prop:value=move || form.get().quantity/>
                </label>
                <label>
                    "Expiry Date"
                    <input type="date" readonly prop:value=move || form.get().expiry_date/>
                </label>
            </div>
            <button class="btn btn--danger" on:click=submit>
                "Delete item"
            </button>
        </div>
    }
}
