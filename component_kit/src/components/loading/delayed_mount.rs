// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::time::Instant;

use crate::DEFAULT_MOUNT_DELAY;

/// Holds content back for a short delay after mounting, so that a loading indicator for
/// a fast operation never flashes on screen. Dropping it before the delay elapses means
/// the content is never shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedMount {
    show_at: Instant,
}

impl Default for DelayedMount {
    fn default() -> Self { Self::new(DEFAULT_MOUNT_DELAY) }
}

impl DelayedMount {
    /// Starts the delay now.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            show_at: Instant::now() + delay,
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool { Instant::now() >= self.show_at }

    /// Completes right away if the content is already showing.
    pub async fn wait_until_showing(&self) { tokio::time::sleep_until(self.show_at).await; }
}
