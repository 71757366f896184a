//! Buildings page: card list, floorplan drill-in, and building admin tools.

use leptos::prelude::*;

use crate::components::add_building_user::AddBuildingUser;
use crate::components::building_card::BuildingCard;
use crate::components::new_building::NewBuildingDialog;
use crate::components::room_overlay::RoomOverlay;
use crate::pages::room::RoomView;
use crate::state::auth::AuthState;
use crate::state::buildings::BuildingsState;
use crate::state::catalog::CatalogState;
use crate::state::toasts::ToastsState;

/// Building list with floorplan drill-in.
///
/// Three nested views share this route: the card list, an open building's
/// floorplan with clickable room overlays, and the selected room's stock.
#[component]
pub fn BuildingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let buildings = expect_context::<RwSignal<BuildingsState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if !auth.get().is_authenticated() {
            return;
        }
        if buildings.get_untracked().items.is_empty() {
            super::load_buildings(auth, buildings, toasts);
        }
        if catalog.get_untracked().items.is_empty() {
            super::load_catalog(auth, catalog, toasts);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (catalog, toasts);

    let on_created = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        super::load_buildings(auth, buildings, toasts);
    });

    let open_building = move |id: i64| {
        buildings.update(|b| b.open_building_id = Some(id));
    };

    let back = move |_| buildings.update(BuildingsState::back_to_list);

    let list_view = move || {
        let state = buildings.get();
        if state.loading {
            return view! { <p>"Loading buildings..."</p> }.into_any();
        }
        view! {
            <div class="buildings-page__list">
                {state
                    .items
                    .into_iter()
                    .map(|b| {
                        view! {
                            <BuildingCard
                                id=b.id
                                name=b.name
                                image_url=b.building_img_url
                                on_open=Callback::new(open_building)
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    let floorplan_view = move |building_id: i64| {
        let state = buildings.get();
        let Some(building) = state.items.iter().find(|b| b.id == building_id).cloned()
        else {
            return view! { <p>"Building not found."</p> }.into_any();
        };
        let is_admin = auth
            .get()
            .user_id()
            .is_some_and(|user_id| state.is_admin(user_id));
        view! {
            <div class="buildings-page__open">
                <button class="btn btn--ghost" on:click=back>
                    "Back"
                </button>
                <h2>"Welcome to: " {building.name.clone()}</h2>
                <p>"Click on any room to go there and look at the stock there."</p>
                <div class="floorplan">
                    <img src=building.building_img_url alt="building map"/>
                    {building
                        .rooms
                        .iter()
                        .map(|room| {
                            let room = room.clone();
                            let picked = room.clone();
                            view! {
                                <RoomOverlay
                                    name=room.name
                                    left=room.left
                                    top=room.top
                                    width=room.width
                                    height=room.height
                                    on_click=Callback::new(move |()| {
                                        buildings.update(|b| b.select_room(picked.clone()));
                                    })
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <AddBuildingUser building_id=building.id admin=is_admin/>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="buildings-page">
            <header class="buildings-page__header">
                <h1>"Buildings"</h1>
                <NewBuildingDialog on_created=on_created/>
            </header>
            {move || {
                let state = buildings.get();
                if state.selected_room.is_some() {
                    view! { <RoomView/> }.into_any()
                } else if let Some(id) = state.open_building_id {
                    floorplan_view(id)
                } else {
                    list_view()
                }
            }}
        </div>
    }
}
