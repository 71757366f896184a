//! New-building dialog: floorplan image, drawn rooms, storage upload.

use leptos::prelude::*;

use crate::components::rectangle_select::{RectangleSelection, SelectionParams};
use crate::components::room_overlay::RoomOverlay;
use crate::net::types::NewRoom;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastsState;

/// An in-progress room box, kept until the user names and adds it.
#[derive(Clone, Debug, Default, PartialEq)]
struct PendingBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[cfg(feature = "hydrate")]
fn read_preview(file: &web_sys::File, preview_url: RwSignal<Option<String>>) {
    use wasm_bindgen::JsCast;

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let inner = reader.clone();
    let onloadend = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
        move |_: web_sys::ProgressEvent| {
            if let Some(url) = inner.result().ok().and_then(|v| v.as_string()) {
                preview_url.set(Some(url));
            }
        },
    );
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    onloadend.forget();
    let _ = reader.read_as_data_url(file);
}

/// Dialog for creating a building: pick a floorplan image, drag out room
/// boxes on the preview, then upload the image and persist everything.
///
/// `on_created` fires after the success dialog closes so the hosting page
/// can refetch its building list.
#[component]
pub fn NewBuildingDialog(#[prop(optional)] on_created: Option<Callback<()>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let open = RwSignal::new(false);
    let success = RwSignal::new(false);
    let building_name = RwSignal::new(String::new());
    let room_name = RwSignal::new(String::new());
    let preview_url = RwSignal::new(Option::<String>::None);
    let rooms = RwSignal::new(Vec::<NewRoom>::new());
    let pending = RwSignal::new(Option::<PendingBox>::None);
    let saving = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let picked_file = RwSignal::new_local(Option::<web_sys::File>::None);

    let reset = move || {
        building_name.set(String::new());
        room_name.set(String::new());
        preview_url.set(None);
        rooms.set(Vec::new());
        pending.set(None);
        saving.set(false);
        #[cfg(feature = "hydrate")]
        picked_file.set(None);
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|list| list.get(0))
            else {
                return;
            };
            read_preview(&file, preview_url);
            picked_file.set(Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    // Discard the previous preview box as soon as a fresh drag starts, so it
    // does not linger between pointer-down and the first reported move.
    let on_begin = Callback::new(move |()| pending.set(None));

    let on_select = Callback::new(move |params: SelectionParams| {
        pending.set(Some(PendingBox {
            left: params.top_left.0,
            top: params.top_left.1,
            width: params.width,
            height: params.height,
        }));
    });

    let add_room = move |_| {
        let Some(boxed) = pending.get_untracked() else {
            return;
        };
        let name = room_name.get_untracked();
        rooms.update(|r| {
            r.push(NewRoom {
                name,
                left: boxed.left,
                top: boxed.top,
                width: boxed.width,
                height: boxed.height,
                building_id: 0,
            });
        });
        pending.set(None);
        room_name.set(String::new());
    };

    let create = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(token) = auth.get_untracked().token else {
                return;
            };
            let Some(file) = picked_file.get_untracked() else {
                toasts.update(|t| {
                    t.error("Missing image", "Pick a floorplan image first");
                });
                return;
            };
            let name = building_name.get_untracked();
            let drawn = rooms.get_untracked();
            saving.set(true);
            leptos::task::spawn_local(async move {
                let uploaded =
                    crate::net::api::upload_building_image(&token, &name, &file).await;
                let result = match uploaded {
                    Ok(url) => {
                        let payload = crate::net::types::NewBuildingPayload {
                            building: crate::net::types::NewBuilding {
                                name,
                                image_size: "200px".to_owned(),
                                building_img_url: url,
                            },
                            rooms: drawn,
                        };
                        crate::net::api::create_building(&token, &payload).await
                    }
                    Err(e) => Err(e),
                };
                saving.set(false);
                match result {
                    Ok(()) => success.set(true),
                    Err(e) => {
                        log::error!("building creation failed: {e}");
                        toasts.update(|t| {
                            t.error("Error creating building", &e);
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toasts);
        }
    };

    let close_success = move |_| {
        success.set(false);
        open.set(false);
        reset();
        if let Some(cb) = on_created.as_ref() {
            cb.run(());
        }
    };

    view! {
        <button class="btn" on:click=move |_| open.set(true)>
            "Add new building"
        </button>
        <Show when=move || open.get()>
            <div class="dialog__backdrop">
                <div class="dialog dialog--wide">
                    <h2>"New Building"</h2>
                    <p>
                        "Highlight areas of the image and input the name to preview the new room. Click \"Add room\" to add the room."
                    </p>
                    <label>
                        "Building Image:"
                        <input type="file" accept="image/*" on:change=on_file />
                    </label>
                    <label>
                        "Building Name:"
                        <input
                            type="text"
                            prop:value=move || building_name.get()
                            on:input=move |ev| building_name.set(event_target_value(&ev))
                        />
                    </label>
                    <RectangleSelection on_begin=on_begin on_select=on_select>
                        <div
                            class="floorplan floorplan--draft"
                            style=move || {
                                preview_url
                                    .get()
                                    .map(|url| format!("background-image: url({url});"))
                                    .unwrap_or_default()
                            }
                        >
                            {move || {
                                rooms
                                    .get()
                                    .into_iter()
                                    .map(|room| {
                                        view! {
                                            <RoomOverlay
                                                name=room.name
                                                left=room.left
                                                top=room.top
                                                width=room.width
                                                height=room.height
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            {move || {
                                pending
                                    .get()
                                    .filter(|b| b.height > 0.0)
                                    .map(|b| {
                                        view! {
                                            <RoomOverlay
                                                name=room_name.get()
                                                left=b.left
                                                top=b.top
                                                width=b.width
                                                height=b.height
                                            />
                                        }
                                    })
                            }}
                        </div>
                    </RectangleSelection>
                    <label>
                        "Room Name:"
                        <input
                            type="text"
                            prop:value=move || room_name.get()
                            on:input=move |ev| room_name.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=add_room>
                            "Add room"
                        </button>
                        <button class="btn" disabled=move || saving.get() on:click=create>
                            "Create new building"
                        </button>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                open.set(false);
                                reset();
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
        <Show when=move || success.get()>
            <div class="dialog__backdrop">
                <div class="dialog">
                    <h2>"Success!"</h2>
                    <p>
                        "The new building has been recorded, close this dialog and head to the main page to view the new building!"
                    </p>
                    <button class="btn" on:click=close_success>
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
