//! Card showing one item's stock within a room.

use leptos::prelude::*;

use crate::net::types::{Item, RoomItem};
use crate::util::dates;

/// Item summary card for the room view: name, serial, par, UOM, expiry.
#[component]
pub fn ItemCard(item: Item, room_item: RoomItem) -> impl IntoView {
    let expiry = dates::display_expiry(room_item.expiry_date.as_deref());
    view! {
        <div class="item-card">
            <h3 class="item-card__name">{item.item_name}</h3>
            <dl class="item-card__details">
                <dt>"Serial No."</dt>
                <dd>{item.serial_num}</dd>
                <dt>"Par level"</dt>
                <dd>{item.par_level}</dd>
                <dt>"Quantity"</dt>
                <dd>{format!("{} {}", room_item.quantity, room_item.uom)}</dd>
                <dt>"Expiry date"</dt>
                <dd>{expiry}</dd>
            </dl>
        </div>
    }
}
