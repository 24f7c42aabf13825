// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::ConfigError;

/// Batched reveal of a long list. Only a prefix of the items is rendered, and the prefix
/// grows one batch at a time when the user scrolls to its end.
///
/// ```text
/// total = 70, batch = 30
///
///   new()        ██████████░░░░░░░░░░░░░░░░░░░░   0..30   has_more
///   load_more()  ████████████████████░░░░░░░░░░   0..60   has_more
///   load_more()  ██████████████████████████████   0..70
/// ```
///
/// Without a batch size the whole list is visible from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfiniteScroll {
    total: usize,
    batch: Option<usize>,
    /// Can exceed `total` after [`Self::set_total`] shrinks the list. Reads clamp it.
    shown: usize,
}

impl InfiniteScroll {
    /// # Errors
    ///
    /// [`ConfigError::ZeroBatchSize`] if `batch` is `Some(0)`.
    pub fn new(total: usize, batch: Option<usize>) -> Result<Self, ConfigError> {
        if batch == Some(0) {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(Self {
            total,
            batch,
            shown: batch.unwrap_or(total),
        })
    }

    #[must_use]
    pub fn total(&self) -> usize { self.total }

    #[must_use]
    pub fn batch(&self) -> Option<usize> { self.batch }

    /// Number of items currently rendered, never more than [`Self::total`].
    #[must_use]
    pub fn shown(&self) -> usize { self.shown.min(self.total) }

    #[must_use]
    pub fn has_more(&self) -> bool { self.batch.is_some() && self.shown < self.total }

    /// Reveals the next batch. Returns `false` if there was nothing left to reveal.
    pub fn load_more(&mut self) -> bool {
        match self.batch {
            Some(batch) if self.shown < self.total => {
                self.shown = self.shown.saturating_add(batch).min(self.total);
                tracing::trace!(shown = self.shown, total = self.total, "load more");
                true
            }
            _ => false,
        }
    }

    /// Indices of the rendered items.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> { 0..self.shown() }

    /// The list changed length. What is already revealed stays revealed.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if self.batch.is_none() {
            self.shown = total;
        }
    }

    /// Back to a single batch, eg: after the list was filtered.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.shown = self.batch.unwrap_or(total);
    }

    /// The rendered prefix of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.shown().min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_batches_until_exhausted() {
        let mut it = InfiniteScroll::new(70, Some(30)).unwrap();
        assert_eq!(it.visible_range(), 0..30);
        assert!(it.has_more());

        assert!(it.load_more());
        assert_eq!(it.visible_range(), 0..60);

        assert!(it.load_more());
        assert_eq!(it.visible_range(), 0..70);
        assert!(!it.has_more());
        assert!(!it.load_more());
    }

    #[test]
    fn test_no_batch_shows_everything() {
        let mut it = InfiniteScroll::new(12, None).unwrap();
        assert_eq!(it.shown(), 12);
        assert!(!it.has_more());
        assert!(!it.load_more());

        it.set_total(20);
        assert_eq!(it.shown(), 20);
    }

    #[test]
    fn test_batch_larger_than_total() {
        let it = InfiniteScroll::new(5, Some(30)).unwrap();
        assert_eq!(it.visible_range(), 0..5);
        assert!(!it.has_more());
    }

    #[test]
    fn test_zero_batch_is_rejected() {
        assert_eq!(InfiniteScroll::new(5, Some(0)), Err(ConfigError::ZeroBatchSize));
    }

    #[test]
    fn test_set_total_keeps_shown_within_total() {
        let mut it = InfiniteScroll::new(100, Some(30)).unwrap();
        it.load_more();
        it.set_total(40);
        assert_eq!(it.shown(), 40);
        assert!(!it.has_more());

        it.set_total(100);
        assert_eq!(it.shown(), 60);
        assert!(it.has_more());
    }

    #[test]
    fn test_reset_and_visible_slice() {
        let items = (0..50).collect::<Vec<_>>();
        let mut it = InfiniteScroll::new(items.len(), Some(20)).unwrap();
        it.load_more();
        assert_eq!(it.visible(&items).len(), 40);

        it.reset(10);
        assert_eq!(it.visible(&items[..10]), &items[..10]);
        assert!(!it.has_more());
    }
}
