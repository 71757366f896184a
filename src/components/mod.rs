//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render inventory chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod add_building_user;
pub mod building_card;
pub mod cart_panel;
pub mod item_card;
pub mod new_building;
pub mod rectangle_select;
pub mod room_overlay;
pub mod toast_host;
