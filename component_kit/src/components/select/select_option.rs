// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// One entry of a select. `keys` are extra search terms for [`crate::filter_options`],
/// eg: a province code next to its full name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub disabled: bool,
    pub keys: Vec<String>,
}

impl SelectOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }
}

/// How the options of a select are presented. Every interface except
/// [`SelectInterface::Filter`] is a native overlay that reports a plain selection. The
/// filter interface is a modal with a search bar and a batched option list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumIter, EnumString,
)]
pub enum SelectInterface {
    #[default]
    #[strum(serialize = "popover")]
    Popover,
    #[strum(serialize = "action-sheet")]
    ActionSheet,
    #[strum(serialize = "alert")]
    Alert,
    #[strum(serialize = "modal")]
    Modal,
    #[strum(serialize = "filter")]
    Filter,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_option_builder() {
        let it = SelectOption::new("Milano", "MI")
            .with_keys(["lombardia", "mi"])
            .with_disabled(true);
        assert_eq!(it.label, "Milano");
        assert_eq!(it.value, "MI");
        assert!(it.disabled);
        assert_eq!(it.keys, vec!["lombardia".to_string(), "mi".to_string()]);
    }

    #[test]
    fn test_interface_round_trips_through_str() {
        assert_eq!(SelectInterface::ActionSheet.to_string(), "action-sheet");
        assert_eq!(
            "filter".parse::<SelectInterface>().unwrap(),
            SelectInterface::Filter
        );
        assert!("dropdown".parse::<SelectInterface>().is_err());
    }
}
