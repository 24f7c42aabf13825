// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A single, cancelable "do X after Y ms of no activity" deadline.

use std::time::Duration;

use tokio::time::Instant;

/// A re-armable deadline that models one pending delayed action.
///
/// There is no spawned task behind this: the owner of the deadline decides what to do
/// when it expires, typically in a `tokio::select!` branch of its own event loop. This
/// is what keeps "at most one pending timer" true by construction, since re-arming
/// replaces the only [`Instant`] held here.
///
/// | State   | `is_pending()` | Leaves via                       |
/// |---------|----------------|----------------------------------|
/// | Idle    | `false`        | [`Self::arm`]                    |
/// | Pending | `true`         | [`Self::cancel`], [`Self::take`] |
///
/// # Integration with `tokio::select!`
///
/// ```rust
/// use std::time::Duration;
/// use component_kit::DebouncedDeadline;
///
/// # async fn example(mut rx: tokio::sync::mpsc::Receiver<String>) {
/// let mut deadline = DebouncedDeadline::new(Duration::from_millis(600));
/// let mut latest: Option<String> = None;
///
/// loop {
///     tokio::select! {
///         maybe_event = rx.recv() => {
///             let Some(event) = maybe_event else { break };
///             latest = Some(event);
///             deadline.arm();
///         }
///         () = deadline.sleep_until(), if deadline.is_pending() => {
///             deadline.take();
///             if let Some(value) = latest.take() {
///                 println!("{value}");
///             }
///         }
///     }
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DebouncedDeadline {
    /// [None] means that nothing is pending.
    deadline: Option<Instant>,
    /// How long to wait after the last call to [`Self::arm`].
    window: Duration,
}

impl DebouncedDeadline {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            deadline: None,
            window,
        }
    }

    /// Cancels whatever is pending and starts a fresh window from now.
    pub fn arm(&mut self) { self.deadline = Some(Instant::now() + self.window); }

    /// Drops the pending deadline, if any. Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool { self.deadline.take().is_some() }

    /// Consumes the deadline once it has expired. Returns `false` (and leaves the
    /// deadline untouched) if nothing is pending or the deadline is still in the future.
    pub fn take(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= Instant::now() => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool { self.deadline.is_some() }

    #[must_use]
    pub fn get(&self) -> Option<Instant> { self.deadline }

    #[must_use]
    pub fn window(&self) -> Duration { self.window }

    /// Sleeps until the deadline expires. If nothing is pending, this never completes,
    /// so guard the `select!` branch with [`Self::is_pending`].
    pub async fn sleep_until(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_idle() {
        let it = DebouncedDeadline::new(Duration::from_millis(10));
        assert!(!it.is_pending());
        assert!(it.get().is_none());
        assert_eq!(it.window(), Duration::from_millis(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_arm_then_cancel() {
        let mut it = DebouncedDeadline::new(Duration::from_millis(10));
        it.arm();
        assert!(it.is_pending());
        assert!(it.cancel());
        assert!(!it.is_pending());
        assert!(!it.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_pushes_deadline_out() {
        let mut it = DebouncedDeadline::new(Duration::from_millis(20));
        it.arm();
        let first = it.get().unwrap();

        tokio::time::advance(Duration::from_millis(5)).await;
        it.arm();
        let second = it.get().unwrap();

        assert_eq!(second - first, Duration::from_millis(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_take_only_after_expiry() {
        let mut it = DebouncedDeadline::new(Duration::from_millis(20));
        it.arm();
        assert!(!it.take());
        assert!(it.is_pending());

        tokio::time::advance(Duration::from_millis(20)).await;
        assert!(it.take());
        assert!(!it.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_until_waits_for_window() {
        let mut it = DebouncedDeadline::new(Duration::from_millis(600));
        it.arm();

        let start = Instant::now();
        it.sleep_until().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(600) && elapsed < Duration::from_millis(602),
            "Expected ~600ms, got {elapsed:?}"
        );
    }
}
