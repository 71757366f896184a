//! Freehand rectangle selection over a floorplan image.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used when laying out rooms on a new building: the user drags a box over
//! the displayed image and the component reports its bounds as percentages
//! of the container's rendered size, so the stored geometry stays valid when
//! the image is later rendered at a different pixel size.
//!
//! Pointer events cover mouse and touch with one code path. A press records
//! the origin and the container box; selection begins on the first move
//! while held and ends on release or when the pointer leaves the container.

#[cfg(test)]
#[path = "rectangle_select_test.rs"]
mod rectangle_select_test;

use leptos::prelude::*;

/// Fixed shrinkage, in percentage points, so a selection edge never sits
/// exactly on the container boundary.
pub const EDGE_INSET_PCT: f64 = 0.1;

/// The container's bounding box in viewport pixels at press time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A selection report: raw pointer geometry plus the derived percentage box.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionParams {
    /// Press point in viewport pixels.
    pub origin: (f64, f64),
    /// Current drag point in viewport pixels.
    pub target: (f64, f64),
    /// Container bounds the percentages are relative to.
    pub limit: ContainerBox,
    /// Normalized top-left corner as (left%, top%).
    pub top_left: (f64, f64),
    /// Box width as a percentage of the container width.
    pub width: f64,
    /// Box height as a percentage of the container height.
    pub height: f64,
}

/// Derive the percentage box for a drag from `origin` to `target` inside
/// `limit`.
///
/// Width and height are inset by [`EDGE_INSET_PCT`] and clamped at zero, so
/// a report never carries a negative dimension. A degenerate container
/// (zero or negative size) yields a zero-sized box rather than an error.
pub fn selection_params(
    origin: (f64, f64),
    target: (f64, f64),
    limit: ContainerBox,
) -> SelectionParams {
    if limit.width <= 0.0 || limit.height <= 0.0 {
        return SelectionParams {
            origin,
            target,
            limit,
            top_left: (0.0, 0.0),
            width: 0.0,
            height: 0.0,
        };
    }

    let left_pct = (origin.0.min(target.0) - limit.left) * 100.0 / limit.width;
    let top_pct = (origin.1.min(target.1) - limit.top) * 100.0 / limit.height;
    let width_pct = ((origin.0 - target.0).abs() * 100.0 / limit.width - EDGE_INSET_PCT).max(0.0);
    let height_pct = ((origin.1 - target.1).abs() * 100.0 / limit.height - EDGE_INSET_PCT).max(0.0);

    SelectionParams {
        origin,
        target,
        limit,
        top_left: (left_pct, top_pct),
        width: width_pct,
        height: height_pct,
    }
}

/// Drag surface wrapping the floorplan preview.
///
/// Reports the in-progress selection through `on_select` on every pointer
/// move; `on_begin` fires once when a drag turns into a selection.
#[component]
pub fn RectangleSelection(
    #[prop(optional)] disabled: bool,
    #[prop(optional)] on_begin: Option<Callback<()>>,
    on_select: Callback<SelectionParams>,
    children: Children,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let hold = RwSignal::new(false);
    let selecting = RwSignal::new(false);
    let origin = RwSignal::new((0.0_f64, 0.0_f64));
    let limit = RwSignal::new(ContainerBox::default());
    #[cfg(not(feature = "hydrate"))]
    let _ = (origin, limit, on_begin, on_select);

    let close = move || {
        hold.set(false);
        selecting.set(false);
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if disabled {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = container.get() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            limit.set(ContainerBox {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            });
            let point = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            origin.set(point);
            selecting.set(false);
            hold.set(true);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            if !hold.get_untracked() {
                return;
            }
            if !selecting.get_untracked() {
                selecting.set(true);
                if let Some(cb) = on_begin.as_ref() {
                    cb.run(());
                }
            }
            let target = (f64::from(ev.client_x()), f64::from(ev.client_y()));
            let params = selection_params(origin.get_untracked(), target, limit.get_untracked());
            on_select.run(params);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            class="rectangle-select"
            style="touch-action: none; width: inherit; height: inherit;"
            node_ref=container
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=move |_| close()
            on:pointerleave=move |_| close()
        >
            {children()}
        </div>
    }
}
