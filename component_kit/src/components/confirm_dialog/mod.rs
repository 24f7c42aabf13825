// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod confirm_dialog_struct;

// Re-export.
pub use confirm_dialog_struct::*;
