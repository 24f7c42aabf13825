// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_PAGE_ID, DebouncedDeadline, NotificationMessage};

/// Single notification slot of a page. Showing a notification replaces the current one.
///
/// The slot only renders while its page is active (between [`Self::enter`] and
/// [`Self::leave`]). The auto-hide timer runs while the notification is visible: leaving
/// the page stops it, and entering the page again starts it over.
///
/// Like [`crate::TextField`], the container owns no timer task. Its owner `select!`s on
/// [`Self::sleep_until_auto_hide`] and then calls [`Self::on_auto_hide`].
#[derive(Debug)]
pub struct NotificationContainer {
    page_id: String,
    is_active: bool,
    current: Option<NotificationMessage>,
    auto_hide: Option<DebouncedDeadline>,
}

impl Default for NotificationContainer {
    fn default() -> Self { Self::new(DEFAULT_PAGE_ID) }
}

impl NotificationContainer {
    #[must_use]
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            is_active: false,
            current: None,
            auto_hide: None,
        }
    }

    /// Id of the element the toast is anchored to.
    #[must_use]
    pub fn position_anchor(&self) -> String { format!("{}-header", self.page_id) }

    #[must_use]
    pub fn is_active(&self) -> bool { self.is_active }

    /// The notification to render, if any. [None] while the page is not active, even if
    /// the slot is occupied.
    #[must_use]
    pub fn visible(&self) -> Option<&NotificationMessage> {
        if self.is_active { self.current.as_ref() } else { None }
    }

    /// The slot content, whether or not it is visible.
    #[must_use]
    pub fn current(&self) -> Option<&NotificationMessage> { self.current.as_ref() }

    pub fn show(&mut self, message: impl Into<NotificationMessage>) {
        let message = message.into();
        tracing::debug!(
            page = %self.page_id,
            id = %message.id,
            kind = %message.kind,
            "show notification"
        );
        self.auto_hide = Some(DebouncedDeadline::new(message.auto_hide));
        self.current = Some(message);
        self.arm_if_visible();
    }

    /// Clears the slot. Returns the notification that was in it.
    pub fn dismiss(&mut self) -> Option<NotificationMessage> {
        self.auto_hide = None;
        self.current.take()
    }

    pub fn enter(&mut self) {
        self.is_active = true;
        self.arm_if_visible();
    }

    pub fn leave(&mut self) {
        self.is_active = false;
        if let Some(deadline) = self.auto_hide.as_mut() {
            deadline.cancel();
        }
    }

    #[must_use]
    pub fn is_auto_hide_pending(&self) -> bool {
        self.auto_hide.as_ref().is_some_and(DebouncedDeadline::is_pending)
    }

    /// Completes when the visible notification is due to hide, never if none is.
    pub async fn sleep_until_auto_hide(&self) {
        match self.auto_hide.as_ref() {
            Some(deadline) => deadline.sleep_until().await,
            None => std::future::pending().await,
        }
    }

    /// Clears the slot if its auto-hide deadline has expired. Returns the notification
    /// that was hidden.
    pub fn on_auto_hide(&mut self) -> Option<NotificationMessage> {
        let is_due = self.auto_hide.as_mut().is_some_and(DebouncedDeadline::take);
        if !is_due {
            return None;
        }
        let hidden = self.dismiss();
        if let Some(message) = hidden.as_ref() {
            tracing::debug!(page = %self.page_id, id = %message.id, "auto hide notification");
        }
        hidden
    }

    fn arm_if_visible(&mut self) {
        if self.is_active
            && let Some(deadline) = self.auto_hide.as_mut()
        {
            deadline.arm();
        }
    }
}
