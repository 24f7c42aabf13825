// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Quiescence window after the last keystroke before a text field propagates its buffer.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(600);

/// How long a notification stays up before it hides itself.
pub const DEFAULT_AUTO_HIDE: Duration = Duration::from_millis(5_000);

/// How long a [`crate::DelayedMount`] waits before its content is shown.
pub const DEFAULT_MOUNT_DELAY: Duration = Duration::from_millis(250);

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of options revealed per batch in the filter modal of a select.
pub const DEFAULT_FILTER_LIST_BATCH: usize = 30;

/// Capacity of the inbound event channel of a mounted text field.
pub const FIELD_EVENT_CHANNEL_SIZE: usize = 64;

/// Capacity of the confirm dialog request channel.
pub const DIALOG_REQUEST_CHANNEL_SIZE: usize = 8;

pub const DEFAULT_PAGE_ID: &str = "page";
