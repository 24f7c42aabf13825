// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::DEFAULT_AUTO_HIDE;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationType {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationType {
    /// Theme color name of the toast.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "danger",
            Self::Warning => "warning",
            Self::Info => "primary",
        }
    }

    /// Icon name of the toast.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "checkmark-circle-outline",
            Self::Error => "alert-circle-outline",
            Self::Warning => "warning-outline",
            Self::Info => "information-circle-outline",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationPosition {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Everything about a notification except its id. Unset fields take their defaults in
/// [`NotificationMessage::from_config`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationConfig {
    pub id: Option<String>,
    pub message: String,
    pub kind: NotificationType,
    pub auto_hide: Option<Duration>,
    pub header: Option<String>,
    pub position: NotificationPosition,
}

/// A notification ready to be shown by a [`crate::NotificationContainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub id: String,
    pub message: String,
    pub kind: NotificationType,
    pub auto_hide: Duration,
    pub header: Option<String>,
    pub position: NotificationPosition,
}

impl NotificationMessage {
    /// Fills in the defaults: a random id, and [`DEFAULT_AUTO_HIDE`].
    #[must_use]
    pub fn from_config(config: NotificationConfig) -> Self {
        Self {
            id: config
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            message: config.message,
            kind: config.kind,
            auto_hide: config.auto_hide.unwrap_or(DEFAULT_AUTO_HIDE),
            header: config.header,
            position: config.position,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::of_kind(NotificationType::Success, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::of_kind(NotificationType::Error, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::of_kind(NotificationType::Info, message)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::of_kind(NotificationType::Warning, message)
    }

    fn of_kind(kind: NotificationType, message: impl Into<String>) -> Self {
        Self::from_config(NotificationConfig {
            message: message.into(),
            kind,
            ..Default::default()
        })
    }
}

impl From<NotificationConfig> for NotificationMessage {
    fn from(config: NotificationConfig) -> Self { Self::from_config(config) }
}
