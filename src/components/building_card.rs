//! List row for one building on the buildings page.
//!
//! DESIGN
//! ======
//! The row itself is just a preview; opening the floorplan dialog is the
//! parent's concern, reported through `on_open`.

use leptos::prelude::*;

/// A clickable row showing the building's floorplan thumbnail and name.
#[component]
pub fn BuildingCard(id: i64, name: String, image_url: String, on_open: Callback<i64>) -> impl IntoView {
    view! {
        <button class="building-card" on:click=move |_| on_open.run(id)>
            <img class="building-card__preview" src=image_url alt="building preview"/>
            <span class="building-card__name">{format!("Building Name: {name}")}</span>
        </button>
    }
}
