// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the component state layer.
//!
//! There are two families of errors, and neither of them is a validation failure (an
//! invalid email is a normal `false` from [`crate::validate`], not an error):
//! 1. [`ConfigError`] is returned when a component configuration is rejected at
//!    construction time, eg: a zero debounce window, or inverted numeric bounds.
//! 2. [`ComponentError`] is returned at the async boundary, when the other end of a
//!    channel has gone away, eg: sending a keystroke to a field that was unmounted.

use std::time::Duration;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`ConfigError`], [`ComponentError`], and any other type of
///   error that implements [`miette::Diagnostic`].
pub type CommonResult<T> = miette::Result<T>;

#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum ConfigError {
    #[error("⏱️ Debounce window must be positive, got {window:?}")]
    #[diagnostic(
        code(component_kit::config::zero_debounce_window),
        help("Leave the window unset to use the 600ms default")
    )]
    ZeroDebounceWindow { window: Duration },

    #[error("🔢 Numeric bounds are inverted: min {min} is greater than max {max}")]
    #[diagnostic(code(component_kit::config::inverted_numeric_bounds))]
    InvertedNumericBounds { min: i64, max: i64 },

    #[error("🔢 Numeric bounds were given for a '{kind}' field")]
    #[diagnostic(
        code(component_kit::config::bounds_on_non_numeric_kind),
        help("Only numeric fields clamp their buffer, use InputKind::Numeric")
    )]
    BoundsOnNonNumericKind { kind: String },

    #[error("📄 Table page size must be positive")]
    #[diagnostic(code(component_kit::config::zero_page_size))]
    ZeroPageSize,

    #[error("📜 Infinite scroll batch size must be positive")]
    #[diagnostic(
        code(component_kit::config::zero_batch_size),
        help("Pass None to show every item at once")
    )]
    ZeroBatchSize,
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum ComponentError {
    #[error("🔌 Text field '{field_name}' is no longer mounted")]
    #[diagnostic(code(component_kit::component::driver_closed))]
    DriverClosed { field_name: String },

    #[error("💬 No presenter is attached to the confirm dialog")]
    #[diagnostic(
        code(component_kit::component::dialog_presenter_gone),
        help("Keep the ConfirmRequestReceiver alive for as long as dialogs can be shown")
    )]
    DialogPresenterGone,
}
