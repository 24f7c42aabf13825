// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod notification_container;
pub mod notification_types;

// Re-export.
pub use notification_container::*;
pub use notification_types::*;
