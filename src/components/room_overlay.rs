//! Percentage-positioned room box rendered over a floorplan image.

#[cfg(test)]
#[path = "room_overlay_test.rs"]
mod room_overlay_test;

use leptos::prelude::*;

/// Build the absolute-positioning style for a percentage box.
pub fn overlay_style(left: f64, top: f64, width: f64, height: f64) -> String {
    format!(
        "position: absolute; left: {left}%; top: {top}%; width: {width}%; height: {height}%; user-select: none; z-index: 10;"
    )
}

/// One labeled room box. The parent element must be `position: relative`
/// and contain the floorplan image at full width.
#[component]
pub fn RoomOverlay(
    name: String,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    view! {
        <div
            class="room-overlay"
            class:room-overlay--clickable=clickable
            style=overlay_style(left, top, width, height)
            on:click=move |_| {
                if let Some(cb) = on_click.as_ref() {
                    cb.run(());
                }
            }
        >
            <div class="room-overlay__frame">
                <span class="room-overlay__name">{name}</span>
            </div>
            <div class="room-overlay__fill"></div>
        </div>
    }
}
