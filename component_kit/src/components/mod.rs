// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enables the chattier `trace` logs of the components (eg: one per keystroke). State
/// transitions are always logged at `debug`.
pub const DEBUG_COMPONENT_KIT: bool = false;

// Attach sources.
pub mod confirm_dialog;
pub mod field_listener;
pub mod global_constants;
pub mod list;
pub mod loading;
pub mod notification;
pub mod select;
pub mod table;
pub mod text_field;

// Re-export.
pub use confirm_dialog::*;
pub use field_listener::*;
pub use global_constants::*;
pub use list::*;
pub use loading::*;
pub use notification::*;
pub use select::*;
pub use table::*;
pub use text_field::*;
