//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod csv_export;
pub mod dates;
pub mod download;
pub mod forms;
pub mod persistence;
