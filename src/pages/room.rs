//! Room view: the stocked items of the currently selected room.

use leptos::prelude::*;

use crate::components::item_card::ItemCard;
use crate::state::buildings::BuildingsState;
use crate::state::catalog::CatalogState;

/// Item cards for the room picked on the floorplan.
#[component]
pub fn RoomView() -> impl IntoView {
    let buildings = expect_context::<RwSignal<BuildingsState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    // Back leaves the floorplan entirely and lands on the building list.
    let back = move |_| buildings.update(BuildingsState::back_to_list);

    view! {
        <div class="room-view">
            <button class="btn btn--ghost" on:click=back>
                "Back"
            </button>
            {move || {
                let Some(room) = buildings.get().selected_room else {
                    return view! { <p>"No room selected."</p> }.into_any();
                };
                let state = catalog.get();
                if state.items_loading {
                    return view! { <p>"Loading items..."</p> }.into_any();
                }
                let stocked: Vec<_> = state
                    .items_in_room(room.id)
                    .into_iter()
                    .map(|(item, room_item)| (item.clone(), room_item.clone()))
                    .collect();
                view! {
                    <h2>"Room: " {room.name}</h2>
                    <div class="room-view__cards">
                        {if stocked.is_empty() {
                            view! { <p>"This room has no stocked items."</p> }.into_any()
                        } else {
                            stocked
                                .into_iter()
                                .map(|(item, room_item)| {
                                    view! { <ItemCard item=item room_item=room_item/> }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
