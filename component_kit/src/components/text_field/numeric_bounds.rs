// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ConfigError;

/// Optional inclusive `[min, max]` range for a numeric field. Either end may be open.
/// Construct with [`NumericBounds::try_new`] so that an inverted range is rejected up
/// front, rather than producing a clamp that depends on which bound is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumericBounds {
    min: Option<i64>,
    max: Option<i64>,
}

impl NumericBounds {
    /// No bounds, nothing is clamped.
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// # Errors
    ///
    /// Returns [`ConfigError::InvertedNumericBounds`] if both ends are set and `min >
    /// max`.
    pub fn try_new(min: Option<i64>, max: Option<i64>) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (min, max)
            && min > max
        {
            return Err(ConfigError::InvertedNumericBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Option<i64> { self.min }

    #[must_use]
    pub fn max(&self) -> Option<i64> { self.max }

    #[must_use]
    pub fn is_unbounded(&self) -> bool { self.min.is_none() && self.max.is_none() }

    /// Snaps `value` to the nearest bound if it falls outside the range.
    #[must_use]
    pub fn clamp(&self, value: i64) -> i64 {
        match (self.min, self.max) {
            (Some(min), _) if value < min => min,
            (_, Some(max)) if value > max => max,
            _ => value,
        }
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool { self.clamp(value) == value }
}
