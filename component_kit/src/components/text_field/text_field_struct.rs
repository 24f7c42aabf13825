// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::time::Instant;

use crate::{DEBUG_COMPONENT_KIT, DebouncedDeadline, FieldListener, InputKind,
            TextFieldConfig, format_input};

/// Debounce state of a mounted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing waiting to propagate.
    Idle,
    /// A keystroke armed the deadline, and the buffer will propagate when it expires.
    Pending,
}

/// Text shown under a field. The error wins over the helper text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMessage {
    Error(String),
    Helper(String),
}

/// Point in time copy of a field's observable state, for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldSnapshot {
    pub buffer: String,
    pub is_pending: bool,
    pub is_focused: bool,
    pub last_validity: Option<bool>,
}

/// Controlled text input. Reconciles the caller-owned value with a local edit buffer,
/// formats keystrokes on the fly, and propagates the buffer once typing has paused for
/// the configured debounce window.
///
/// This is a plain state machine that holds no task and no timer thread. Whoever owns it
/// drives it from a single event loop: feed it events with the `on_*` methods, and
/// `select!` on [`Self::sleep_until`] to call [`Self::fire`] when the debounce window
/// expires. [`crate::TextFieldHandle::spawn`] packages exactly that loop into a task.
///
/// ```text
///            keystroke (buffer changed)         keystroke
///   ┌──────┐ ─────────────────────────▶ ┌─────────┐ ◀──┐
///   │ Idle │                            │ Pending │ ───┘ re-arm
///   └──────┘ ◀───────────────────────── └─────────┘
///            fire (propagates), or
///            external value (discards)
/// ```
#[derive(Debug)]
pub struct TextField<L: FieldListener> {
    config: TextFieldConfig,
    buffer: String,
    /// Last value known to be held by the caller: either supplied by it, or propagated
    /// to it. An external value equal to this is an echo, not a change.
    external_value: String,
    deadline: DebouncedDeadline,
    is_focused: bool,
    is_disabled: bool,
    is_loading: bool,
    last_validity: Option<bool>,
    listener: L,
}

impl<L: FieldListener> TextField<L> {
    /// Mounts a field with `config.initial_value` as both the buffer and the external
    /// value.
    pub fn new(config: TextFieldConfig, listener: L) -> Self {
        let deadline = DebouncedDeadline::new(config.debounce_window);
        let buffer = config.initial_value.clone();
        let external_value = config.initial_value.clone();
        tracing::debug!(
            field = %config.name,
            kind = %config.kind,
            window = ?config.debounce_window,
            "mount"
        );
        Self {
            config,
            buffer,
            external_value,
            deadline,
            is_focused: false,
            is_disabled: false,
            is_loading: false,
            last_validity: None,
            listener,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &str { &self.buffer }

    #[must_use]
    pub fn name(&self) -> &str { &self.config.name }

    #[must_use]
    pub fn kind(&self) -> InputKind { self.config.kind }

    #[must_use]
    pub fn config(&self) -> &TextFieldConfig { &self.config }

    #[must_use]
    pub fn listener(&self) -> &L { &self.listener }

    #[must_use]
    pub fn is_pending(&self) -> bool { self.deadline.is_pending() }

    #[must_use]
    pub fn state(&self) -> DebounceState {
        if self.deadline.is_pending() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }

    /// When the pending propagation is due, if any.
    #[must_use]
    pub fn due_at(&self) -> Option<Instant> { self.deadline.get() }

    #[must_use]
    pub fn is_focused(&self) -> bool { self.is_focused }

    /// Outcome of the last validation run, [None] if validation never ran.
    #[must_use]
    pub fn last_validity(&self) -> Option<bool> { self.last_validity }

    /// A disabled or loading field renders as non-interactive and ignores keystrokes.
    #[must_use]
    pub fn is_interactive(&self) -> bool { !self.is_disabled && !self.is_loading }

    pub fn set_disabled(&mut self, is_disabled: bool) { self.is_disabled = is_disabled; }

    pub fn set_loading(&mut self, is_loading: bool) { self.is_loading = is_loading; }

    #[must_use]
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            buffer: self.buffer.clone(),
            is_pending: self.is_pending(),
            is_focused: self.is_focused,
            last_validity: self.last_validity,
        }
    }

    /// Picks the message to show under the field. Both texts come from the caller,
    /// already localized, and an empty string counts as absent.
    #[must_use]
    pub fn error_or_helper(&self, error_text: &str, helper_text: &str) -> Option<FieldMessage> {
        if !error_text.is_empty() {
            Some(FieldMessage::Error(error_text.to_string()))
        } else if !helper_text.is_empty() {
            Some(FieldMessage::Helper(helper_text.to_string()))
        } else {
            None
        }
    }

    /// Formats `raw`, writes it to the buffer right away, and (re-)arms the debounce
    /// deadline. A keystroke that leaves an idle field's buffer unchanged (eg: a letter
    /// typed into a numeric field) does not arm anything.
    pub fn on_keystroke(&mut self, raw: &str) {
        if !self.is_interactive() {
            tracing::trace!(field = %self.config.name, "keystroke ignored, not interactive");
            return;
        }

        let formatted = format_input(raw, self.config.kind, self.config.bounds);

        if !self.deadline.is_pending() && formatted == self.buffer {
            return;
        }

        if DEBUG_COMPONENT_KIT {
            tracing::trace!(
                field = %self.config.name,
                raw = raw,
                buffer = %formatted,
                rearm = self.deadline.is_pending(),
                "keystroke"
            );
        }

        self.buffer = formatted;
        self.deadline.arm();
    }

    pub fn on_focus(&mut self) { self.is_focused = true; }

    /// Validates the current buffer right away, whatever the debounce state. Does not
    /// propagate: that already happened, or will when the pending deadline expires.
    pub fn on_blur(&mut self) {
        self.is_focused = false;
        self.run_validation();
    }

    /// The caller supplied a new value. It is authoritative: it replaces the buffer and
    /// discards any pending edit, which is then never propagated. A value equal to the
    /// one the caller already holds (eg: the echo of this field's own propagation) is
    /// not a change, and is ignored.
    pub fn on_external_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.external_value {
            return;
        }

        if self.deadline.cancel() {
            tracing::debug!(
                field = %self.config.name,
                discarded = %self.buffer,
                "external value discarded pending edit"
            );
        }

        self.external_value.clone_from(&value);
        self.buffer = value;
    }

    /// Propagates the buffer if the debounce deadline has expired: `on_change` first,
    /// then validation. Returns `false` (and does nothing) if there was nothing due.
    pub fn fire(&mut self) -> bool {
        if !self.deadline.take() {
            return false;
        }

        tracing::debug!(field = %self.config.name, value = %self.buffer, "propagate");

        self.external_value.clone_from(&self.buffer);
        self.listener.on_change(&self.buffer);
        self.run_validation();
        true
    }

    /// Completes when the pending deadline expires, never if nothing is pending.
    pub async fn sleep_until(&self) { self.deadline.sleep_until().await; }

    /// Tears the field down. A pending edit is dropped without propagating.
    pub fn unmount(mut self) -> L {
        if self.deadline.cancel() {
            tracing::debug!(
                field = %self.config.name,
                discarded = %self.buffer,
                "unmount discarded pending edit"
            );
        }
        self.listener
    }

    fn run_validation(&mut self) {
        if let Some(is_valid) = self.config.validation.run(self.config.kind, &self.buffer) {
            self.last_validity = Some(is_valid);
            self.listener.on_validation_change(is_valid);
        }
    }
}
