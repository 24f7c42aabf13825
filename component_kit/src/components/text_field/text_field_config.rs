// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{ConfigError, DEFAULT_DEBOUNCE_WINDOW, InputKind, NumericBounds, ValidationMode};

/// Every recognized option of a text field. Build one with [`TextFieldConfig::builder`],
/// which checks the options against each other before a field is ever mounted.
///
/// ```
/// use std::time::Duration;
/// use component_kit::{InputKind, TextFieldConfig};
///
/// let config = TextFieldConfig::builder()
///     .name("quantity")
///     .kind(InputKind::Numeric)
///     .min(0)
///     .max(10)
///     .debounce_window(Duration::from_millis(300))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.bounds.max(), Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldConfig {
    /// Used as the `id` / `name` of the rendered control, and in logs.
    pub name: String,
    pub kind: InputKind,
    /// The external value at mount time.
    pub initial_value: String,
    /// Only meaningful for [`InputKind::Numeric`].
    pub bounds: NumericBounds,
    pub debounce_window: Duration,
    pub validation: ValidationMode,
    /// Carried for the renderer (eg: the `required` attribute). Not enforced here.
    pub required: bool,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: InputKind::default(),
            initial_value: String::new(),
            bounds: NumericBounds::UNBOUNDED,
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            validation: ValidationMode::Enabled,
            required: false,
        }
    }
}

impl TextFieldConfig {
    #[must_use]
    pub fn builder() -> TextFieldConfigBuilder { TextFieldConfigBuilder::default() }
}

#[derive(Debug, Clone, Default)]
pub struct TextFieldConfigBuilder {
    name: Option<String>,
    kind: InputKind,
    initial_value: String,
    min: Option<i64>,
    max: Option<i64>,
    debounce_window: Option<Duration>,
    validation: ValidationMode,
    required: bool,
}

impl TextFieldConfigBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    #[must_use]
    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn debounce_window(mut self, window: Duration) -> Self {
        self.debounce_window = Some(window);
        self
    }

    #[must_use]
    pub fn disable_validation(mut self) -> Self {
        self.validation = ValidationMode::Disabled;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// # Errors
    ///
    /// - [`ConfigError::ZeroDebounceWindow`] if the debounce window is zero.
    /// - [`ConfigError::InvertedNumericBounds`] if `min > max`.
    /// - [`ConfigError::BoundsOnNonNumericKind`] if bounds are set for a kind other than
    ///   [`InputKind::Numeric`].
    pub fn build(self) -> Result<TextFieldConfig, ConfigError> {
        let debounce_window = self.debounce_window.unwrap_or(DEFAULT_DEBOUNCE_WINDOW);
        if debounce_window.is_zero() {
            return Err(ConfigError::ZeroDebounceWindow {
                window: debounce_window,
            });
        }

        let bounds = NumericBounds::try_new(self.min, self.max)?;
        if !bounds.is_unbounded() && self.kind != InputKind::Numeric {
            return Err(ConfigError::BoundsOnNonNumericKind {
                kind: self.kind.to_string(),
            });
        }

        let name = self
            .name
            .unwrap_or_else(|| format!("{}-input", self.kind.as_ref()));

        Ok(TextFieldConfig {
            name,
            kind: self.kind,
            initial_value: self.initial_value,
            bounds,
            debounce_window,
            validation: self.validation,
            required: self.required,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let it = TextFieldConfig::builder().build().unwrap();
        assert_eq!(it.debounce_window, Duration::from_millis(600));
        assert_eq!(it.kind, InputKind::Text);
        assert_eq!(it.validation, ValidationMode::Enabled);
        assert_eq!(it.name, "text-input");
        assert!(it.bounds.is_unbounded());
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let it = TextFieldConfig::builder()
            .debounce_window(Duration::ZERO)
            .build();
        assert_eq!(
            it,
            Err(ConfigError::ZeroDebounceWindow {
                window: Duration::ZERO
            })
        );
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        let it = TextFieldConfig::builder()
            .kind(InputKind::Numeric)
            .min(10)
            .max(1)
            .build();
        assert_eq!(it, Err(ConfigError::InvertedNumericBounds { min: 10, max: 1 }));
    }

    #[test]
    fn test_bounds_need_numeric_kind() {
        let it = TextFieldConfig::builder()
            .kind(InputKind::Email)
            .max(1)
            .build();
        assert_eq!(
            it,
            Err(ConfigError::BoundsOnNonNumericKind {
                kind: "email".to_string()
            })
        );
    }

    #[test]
    fn test_disable_validation() {
        let it = TextFieldConfig::builder()
            .kind(InputKind::Password)
            .disable_validation()
            .required(true)
            .build()
            .unwrap();
        assert_eq!(it.validation, ValidationMode::Disabled);
        assert!(it.required);
    }
}
