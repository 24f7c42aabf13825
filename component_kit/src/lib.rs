// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # component_kit
//!
//! The state layer of a themed form and feedback component library, with the painting
//! left to whatever renders it. Every component here is a plain state machine that a
//! renderer reads from and feeds user input into.
//!
//! The centerpiece is the controlled [`TextField`]:
//! 1. Each keystroke is formatted for the field's [`InputKind`] (eg: a phone number
//!    keeps only digits and a leading `+`, a number is clamped into its bounds), and
//!    written to the local buffer right away, so the control stays responsive.
//! 2. Once typing pauses for the debounce window (600ms by default) the buffer is
//!    propagated to the caller with [`FieldListener::on_change`], and then validated
//!    with [`FieldListener::on_validation_change`].
//! 3. When the caller supplies a new value, it wins: the buffer is overwritten and any
//!    pending propagation is dropped.
//!
//! ```text
//!   keystrokes ─▶ format_input ─▶ buffer ─(600ms quiet)─▶ on_change ─▶ validate
//!                                   ▲                                    │
//!   external value ─────────────────┘ (cancels pending)     on_validation_change
//! ```
//!
//! A field can be driven by hand (call the `on_*` methods and `select!` on
//! [`TextField::sleep_until`]), or spawned on its own tokio task with
//! [`TextFieldHandle::spawn`].
//!
//! ```no_run
//! use component_kit::{FieldSignal, InputKind, TextFieldConfig, TextFieldHandle};
//!
//! # async fn example() -> miette::Result<()> {
//! let config = TextFieldConfig::builder()
//!     .name("email")
//!     .kind(InputKind::Email)
//!     .build()?;
//! let (signal_sender, mut signal_receiver) = tokio::sync::mpsc::unbounded_channel();
//! let field = TextFieldHandle::spawn(config, signal_sender);
//!
//! field.keystroke("a@b.com").await?;
//! // ~600ms later.
//! assert_eq!(
//!     signal_receiver.recv().await,
//!     Some(FieldSignal::Changed("a@b.com".to_string()))
//! );
//! assert_eq!(
//!     signal_receiver.recv().await,
//!     Some(FieldSignal::ValidationChanged(true))
//! );
//! field.unmount().await?;
//! # Ok(())
//! # }
//! ```
//!
//! The other components:
//! - [`SelectField`] with [`filter_options`] for searchable option lists.
//! - [`ConfirmDialog`] to ask a yes / no question and await the answer.
//! - [`NotificationContainer`] for a page's auto-hiding toast.
//! - [`DelayedMount`] to keep fast loading indicators from flashing.
//! - [`InfiniteScroll`] for batched reveal of long lists.
//! - [`Table`] and [`TableState`] for paging and sorting of data tables.
//!
//! Logging uses [`tracing`], see [`try_initialize_logging_global`]. Configuration
//! mistakes are reported as [`ConfigError`] when a component is built, and a failed
//! validation is never an error, just `false`.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod components;
pub mod core;

// Re-export.
pub use crate::core::*;
pub use components::*;
