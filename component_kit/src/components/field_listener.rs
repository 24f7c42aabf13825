// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::mpsc::UnboundedSender;

/// The caller side of a controlled field (text field or select). The field owns its
/// buffer, the caller owns the value, and this is how the field tells the caller that
/// the value should change.
///
/// Two implementations ship with the crate:
/// - [`UnboundedSender<FieldSignal>`], to forward signals into the caller's own event
///   loop (message passing, the usual way).
/// - [`Vec<FieldSignal>`], to record signals, handy in tests.
pub trait FieldListener {
    /// The committed value of the field.
    fn on_change(&mut self, value: &str);

    /// Outcome of (re-)running validation. Never called while validation is disabled.
    fn on_validation_change(&mut self, is_valid: bool);
}

/// What a field reports to its [`FieldListener`], as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSignal {
    Changed(String),
    ValidationChanged(bool),
}

impl FieldListener for UnboundedSender<FieldSignal> {
    /// The receiver going away just means nobody is listening anymore.
    fn on_change(&mut self, value: &str) {
        self.send(FieldSignal::Changed(value.to_string())).ok();
    }

    fn on_validation_change(&mut self, is_valid: bool) {
        self.send(FieldSignal::ValidationChanged(is_valid)).ok();
    }
}

impl FieldListener for Vec<FieldSignal> {
    fn on_change(&mut self, value: &str) { self.push(FieldSignal::Changed(value.to_string())); }

    fn on_validation_change(&mut self, is_valid: bool) {
        self.push(FieldSignal::ValidationChanged(is_valid));
    }
}
