//! Shared application state provided through Leptos contexts.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one plain state struct wrapped in an `RwSignal` by
//! `app::App`. Mutation helpers are inherent methods on the structs so the
//! logic unit-tests without a reactive runtime.

pub mod auth;
pub mod buildings;
pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod toasts;
