// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Yes / no confirmation as an async request and response.
//!
//! The code that needs an answer holds a [`ConfirmDialog`] and awaits
//! [`ConfirmDialog::show`]. The code that can put a dialog on screen holds the matching
//! [`ConfirmRequestReceiver`], and resolves each [`ConfirmRequest`] it receives with the
//! role of the button the user pressed.
//!
//! ```text
//!   ConfirmDialog::show ──ConfirmRequest (mpsc)──▶ presenter
//!          ▲                                          │
//!          └──────────── bool (oneshot) ◀── resolve(DialogRole)
//! ```

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tokio::sync::{mpsc, oneshot};

use crate::{CommonResult, ComponentError, DIALOG_REQUEST_CHANNEL_SIZE};

/// Why the dialog went away. Only [`DialogRole::Confirm`] counts as a yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DialogRole {
    Confirm,
    Cancel,
    /// Dismissed by tapping outside of the dialog.
    Backdrop,
}

impl DialogRole {
    /// The buttons of a confirm dialog, in display order.
    pub const BUTTONS: [DialogRole; 2] = [DialogRole::Cancel, DialogRole::Confirm];

    /// Translation key of the button label, in the `buttons` namespace.
    #[must_use]
    pub fn label_key(self) -> &'static str { self.into() }
}

/// One pending question for the presenter. Dropping it without calling
/// [`Self::resolve`] answers "no".
#[derive(Debug)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    responder: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    pub fn resolve(self, role: DialogRole) {
        tracing::debug!(title = %self.title, %role, "confirm dialog resolved");
        // The asking side may have given up waiting, that is fine.
        self.responder.send(role == DialogRole::Confirm).ok();
    }
}

/// Presenter side of a [`ConfirmDialog`].
#[derive(Debug)]
pub struct ConfirmRequestReceiver {
    receiver: mpsc::Receiver<ConfirmRequest>,
}

impl ConfirmRequestReceiver {
    /// Next request to present. [None] once every [`ConfirmDialog`] is dropped.
    pub async fn recv(&mut self) -> Option<ConfirmRequest> { self.receiver.recv().await }
}

/// Asking side, cheap to clone. See the module docs.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    sender: mpsc::Sender<ConfirmRequest>,
}

impl ConfirmDialog {
    #[must_use]
    pub fn new() -> (Self, ConfirmRequestReceiver) {
        let (sender, receiver) = mpsc::channel(DIALOG_REQUEST_CHANNEL_SIZE);
        (Self { sender }, ConfirmRequestReceiver { receiver })
    }

    /// Presents the dialog and waits for the user. Resolves to `true` only if the
    /// confirm button was pressed.
    ///
    /// # Errors
    ///
    /// [`ComponentError::DialogPresenterGone`] if the [`ConfirmRequestReceiver`] was
    /// dropped.
    pub async fn show(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> CommonResult<bool> {
        let (responder, response) = oneshot::channel();
        let request = ConfirmRequest {
            title: title.into(),
            message: message.into(),
            responder,
        };

        self.sender
            .send(request)
            .await
            .map_err(|_| ComponentError::DialogPresenterGone)?;

        // Dropped without an answer means dismissed without a selection.
        Ok(response.await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    async fn ask_and_resolve(role: DialogRole) -> bool {
        let (dialog, mut presenter) = ConfirmDialog::new();
        let join_handle = tokio::spawn(async move {
            let request = presenter.recv().await.unwrap();
            assert_eq!(request.title, "Delete");
            assert_eq!(request.message, "Are you sure?");
            request.resolve(role);
        });
        let answer = dialog.show("Delete", "Are you sure?").await.unwrap();
        join_handle.await.unwrap();
        answer
    }

    #[tokio::test]
    async fn test_only_confirm_is_a_yes() {
        assert!(ask_and_resolve(DialogRole::Confirm).await);
        assert!(!ask_and_resolve(DialogRole::Cancel).await);
        assert!(!ask_and_resolve(DialogRole::Backdrop).await);
    }

    #[tokio::test]
    async fn test_dropped_request_is_a_no() {
        let (dialog, mut presenter) = ConfirmDialog::new();
        tokio::spawn(async move {
            drop(presenter.recv().await);
        });
        assert!(!dialog.show("t", "m").await.unwrap());
    }

    #[tokio::test]
    async fn test_no_presenter() {
        let (dialog, presenter) = ConfirmDialog::new();
        drop(presenter);
        let report = dialog.show("t", "m").await.unwrap_err();
        assert_eq!(
            report.downcast_ref::<ComponentError>(),
            Some(&ComponentError::DialogPresenterGone)
        );
    }

    #[test]
    fn test_button_labels() {
        let keys = DialogRole::BUTTONS.map(DialogRole::label_key);
        assert_eq!(keys, ["cancel", "confirm"]);
        assert_eq!(DialogRole::Backdrop.label_key(), "backdrop");
    }
}
