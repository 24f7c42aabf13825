// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod formatter;
pub mod input_kind;
pub mod numeric_bounds;
pub mod text_field_config;
pub mod text_field_driver;
pub mod text_field_struct;
pub mod validator;

// Re-export.
pub use formatter::*;
pub use input_kind::*;
pub use numeric_bounds::*;
pub use text_field_config::*;
pub use text_field_driver::*;
pub use text_field_struct::*;
pub use validator::*;
