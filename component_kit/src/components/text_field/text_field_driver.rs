// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs a [`TextField`] on its own tokio task, so that callers can talk to it by message
//! passing instead of driving the debounce deadline themselves.
//!
//! ```text
//!   TextFieldHandle ──FieldEvent──▶ ┌─────────────────────┐ ──on_change──────────▶ listener
//!                                   │ event loop (1 task) │ ──on_validation_change─▶
//!   snapshot() ◀──watch───────────  └─────────────────────┘
//! ```
//!
//! Every mutation of the field happens on that one task. The loop `select!`s between
//! inbound events and the debounce deadline, events first, so a keystroke that arrives
//! on the same tick as the deadline re-arms it instead of racing it.

use miette::IntoDiagnostic;
use tokio::{sync::{mpsc, watch},
            task::JoinHandle};

use crate::{CommonResult, ComponentError, FIELD_EVENT_CHANNEL_SIZE, FieldListener,
            FieldSnapshot, TextField, TextFieldConfig};

/// Inbound events for a mounted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    /// Raw text of the control after the keystroke, before formatting.
    Keystroke(String),
    Blur,
    /// The caller re-rendered the field with this value.
    ExternalValue(String),
    SetDisabled(bool),
    SetLoading(bool),
    Unmount,
}

/// Owner side of a field running on its own task. Dropping the handle unmounts the
/// field, the same as [`Self::unmount`] minus waiting for the task to finish.
#[derive(Debug)]
pub struct TextFieldHandle<L: FieldListener> {
    name: String,
    event_sender: mpsc::Sender<FieldEvent>,
    snapshot_receiver: watch::Receiver<FieldSnapshot>,
    join_handle: JoinHandle<L>,
}

impl<L> TextFieldHandle<L>
where
    L: FieldListener + Send + Sync + 'static,
{
    /// Mounts a field and spawns its event loop. Must be called from within a tokio
    /// runtime.
    pub fn spawn(config: TextFieldConfig, listener: L) -> Self {
        let name = config.name.clone();
        let field = TextField::new(config, listener);
        let (event_sender, event_receiver) = mpsc::channel(FIELD_EVENT_CHANNEL_SIZE);
        let (snapshot_sender, snapshot_receiver) = watch::channel(field.snapshot());
        let join_handle =
            tokio::spawn(run_event_loop(field, event_receiver, snapshot_sender));
        Self {
            name,
            event_sender,
            snapshot_receiver,
            join_handle,
        }
    }
}

impl<L: FieldListener> TextFieldHandle<L> {
    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    /// Latest state published by the event loop.
    #[must_use]
    pub fn snapshot(&self) -> FieldSnapshot { self.snapshot_receiver.borrow().clone() }

    /// Waits until the event loop publishes a state that differs from the last one seen
    /// through this method, and returns it.
    ///
    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn changed(&mut self) -> CommonResult<FieldSnapshot> {
        if self.snapshot_receiver.changed().await.is_err() {
            return Err(self.driver_closed().into());
        }
        Ok(self.snapshot_receiver.borrow_and_update().clone())
    }

    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn keystroke(&self, raw: impl Into<String>) -> CommonResult<()> {
        self.send(FieldEvent::Keystroke(raw.into())).await
    }

    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn focus(&self) -> CommonResult<()> { self.send(FieldEvent::Focus).await }

    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn blur(&self) -> CommonResult<()> { self.send(FieldEvent::Blur).await }

    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn set_external_value(&self, value: impl Into<String>) -> CommonResult<()> {
        self.send(FieldEvent::ExternalValue(value.into())).await
    }

    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn set_disabled(&self, is_disabled: bool) -> CommonResult<()> {
        self.send(FieldEvent::SetDisabled(is_disabled)).await
    }

    /// # Errors
    ///
    /// [`ComponentError::DriverClosed`] if the field was unmounted.
    pub async fn set_loading(&self, is_loading: bool) -> CommonResult<()> {
        self.send(FieldEvent::SetLoading(is_loading)).await
    }

    /// Unmounts the field and waits for its task to finish. A pending edit is dropped
    /// without propagating. Gives the listener back.
    ///
    /// # Errors
    ///
    /// If the event loop task panicked or was aborted.
    pub async fn unmount(self) -> CommonResult<L> {
        // The loop may already be gone, which is the state we want anyway.
        self.event_sender.send(FieldEvent::Unmount).await.ok();
        self.join_handle.await.into_diagnostic()
    }

    async fn send(&self, event: FieldEvent) -> CommonResult<()> {
        self.event_sender
            .send(event)
            .await
            .map_err(|_| self.driver_closed())?;
        Ok(())
    }

    fn driver_closed(&self) -> ComponentError {
        ComponentError::DriverClosed {
            field_name: self.name.clone(),
        }
    }
}

/// The whole life of a mounted field. Returns the listener once the field is unmounted,
/// either by [`FieldEvent::Unmount`] or by every sender being dropped.
pub async fn run_event_loop<L: FieldListener>(
    mut field: TextField<L>,
    mut event_receiver: mpsc::Receiver<FieldEvent>,
    snapshot_sender: watch::Sender<FieldSnapshot>,
) -> L {
    loop {
        tokio::select! {
            biased;

            // This branch is cancel safe because recv is cancel safe.
            maybe_event = event_receiver.recv() => {
                match maybe_event {
                    Some(FieldEvent::Unmount) | None => break,
                    Some(event) => apply_event(&mut field, event),
                }
            }

            () = field.sleep_until(), if field.is_pending() => {
                field.fire();
            }
        }

        // Only wake up snapshot observers when something they can see changed.
        snapshot_sender.send_if_modified(|it| {
            let next = field.snapshot();
            if *it == next {
                false
            } else {
                *it = next;
                true
            }
        });
    }

    field.unmount()
}

fn apply_event<L: FieldListener>(field: &mut TextField<L>, event: FieldEvent) {
    match event {
        FieldEvent::Focus => field.on_focus(),
        FieldEvent::Keystroke(raw) => field.on_keystroke(&raw),
        FieldEvent::Blur => field.on_blur(),
        FieldEvent::ExternalValue(value) => field.on_external_value(value),
        FieldEvent::SetDisabled(is_disabled) => field.set_disabled(is_disabled),
        FieldEvent::SetLoading(is_loading) => field.set_loading(is_loading),
        FieldEvent::Unmount => {}
    }
}
