// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod table_state;
pub mod table_struct;

// Re-export.
pub use table_state::*;
pub use table_struct::*;
