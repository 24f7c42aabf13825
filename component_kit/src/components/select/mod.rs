// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod filter_options;
pub mod select_field_struct;
pub mod select_option;

// Re-export.
pub use filter_options::*;
pub use select_field_struct::*;
pub use select_option::*;
