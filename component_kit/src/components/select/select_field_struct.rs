// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ConfigError, DEFAULT_FILTER_LIST_BATCH, FieldListener, InfiniteScroll,
            SelectInterface, SelectOption, filter_options};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFieldConfig {
    pub name: String,
    pub interface: SelectInterface,
    /// Narrow the native overlay's options by [`SelectField::set_filter_text`].
    pub filterable: bool,
    /// Allow [`SelectField::reset`] to clear the selection.
    pub resettable: bool,
    /// Shown by [`SelectField::display_text`] when nothing is selected.
    pub placeholder: String,
    /// Options revealed per batch in the filter modal. [None] shows all of them.
    pub filter_batch: Option<usize>,
}

impl Default for SelectFieldConfig {
    fn default() -> Self {
        Self {
            name: "select-input".to_string(),
            interface: SelectInterface::default(),
            filterable: false,
            resettable: false,
            placeholder: String::new(),
            filter_batch: Some(DEFAULT_FILTER_LIST_BATCH),
        }
    }
}

/// Controlled select. The caller owns the value, the field owns the transient UI state:
/// the filter text, whether the filter modal is open, and how much of the filtered list
/// is revealed.
///
/// Unlike [`crate::TextField`] there is no debouncing, a selection is propagated right
/// away.
#[derive(Debug)]
pub struct SelectField<L: FieldListener> {
    config: SelectFieldConfig,
    value: String,
    options: Vec<SelectOption>,
    filter_text: String,
    is_filter_modal_open: bool,
    filter_window: InfiniteScroll,
    listener: L,
}

impl<L: FieldListener> SelectField<L> {
    /// # Errors
    ///
    /// [`ConfigError::ZeroBatchSize`] if `config.filter_batch` is `Some(0)`.
    pub fn new(
        config: SelectFieldConfig,
        options: Vec<SelectOption>,
        value: impl Into<String>,
        listener: L,
    ) -> Result<Self, ConfigError> {
        let filter_window = InfiniteScroll::new(options.len(), config.filter_batch)?;
        Ok(Self {
            config,
            value: value.into(),
            options,
            filter_text: String::new(),
            is_filter_modal_open: false,
            filter_window,
            listener,
        })
    }

    #[must_use]
    pub fn value(&self) -> &str { &self.value }

    #[must_use]
    pub fn options(&self) -> &[SelectOption] { &self.options }

    #[must_use]
    pub fn config(&self) -> &SelectFieldConfig { &self.config }

    #[must_use]
    pub fn listener(&self) -> &L { &self.listener }

    #[must_use]
    pub fn filter_text(&self) -> &str { &self.filter_text }

    #[must_use]
    pub fn is_filter_modal_open(&self) -> bool { self.is_filter_modal_open }

    /// The caller re-rendered with this value. No signals are emitted.
    pub fn set_value(&mut self, value: impl Into<String>) { self.value = value.into(); }

    /// Selection from a native overlay. An empty value means "nothing selected", which
    /// is the only invalid selection.
    pub fn select(&mut self, value: impl Into<String>) {
        self.value = value.into();
        tracing::debug!(field = %self.config.name, value = %self.value, "select");
        self.listener.on_change(&self.value);
        self.listener.on_validation_change(!self.value.is_empty());
    }

    /// Options for the native overlay. Only narrowed when the select is filterable and
    /// there is filter text, by a case insensitive substring match on the label.
    #[must_use]
    pub fn displayed_options(&self) -> Vec<&SelectOption> {
        if !self.config.filterable || self.filter_text.is_empty() {
            return self.options.iter().collect();
        }
        let needle = self.filter_text.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn open_filter_modal(&mut self) {
        self.is_filter_modal_open = true;
        self.set_filter_text("");
    }

    pub fn close_filter_modal(&mut self) {
        self.is_filter_modal_open = false;
        self.set_filter_text("");
    }

    /// Updates the search text. The filter modal goes back to its first batch.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        let total = self.filterable_options().len();
        self.filter_window.reset(total);
    }

    /// Every option matching the filter text (see [`filter_options`]).
    #[must_use]
    pub fn filterable_options(&self) -> Vec<&SelectOption> {
        filter_options(&self.options, &self.filter_text)
    }

    /// The revealed batch of [`Self::filterable_options`].
    #[must_use]
    pub fn visible_filterable_options(&self) -> Vec<&SelectOption> {
        let all = self.filterable_options();
        self.filter_window.visible(&all).to_vec()
    }

    #[must_use]
    pub fn has_more_filterable_options(&self) -> bool { self.filter_window.has_more() }

    /// Reveals the next batch in the filter modal. Returns `false` if all were revealed.
    pub fn load_more_filterable_options(&mut self) -> bool { self.filter_window.load_more() }

    /// Selection from the filter modal. Closes it and clears the search text. Returns
    /// `false` (and does nothing) for an unknown or disabled option.
    pub fn choose(&mut self, value: &str) -> bool {
        let is_choosable = self
            .options
            .iter()
            .any(|option| option.value == value && !option.disabled);
        if !is_choosable {
            tracing::trace!(field = %self.config.name, value, "choose ignored");
            return false;
        }

        self.value = value.to_string();
        tracing::debug!(field = %self.config.name, value, "choose");
        self.listener.on_change(&self.value);
        self.listener.on_validation_change(true);
        self.close_filter_modal();
        true
    }

    /// Clears the selection. Returns `false` if the select is not resettable, or nothing
    /// is selected.
    pub fn reset(&mut self) -> bool {
        if !self.config.resettable || self.value.is_empty() {
            return false;
        }
        self.value.clear();
        self.listener.on_change("");
        true
    }

    /// Replaces the options. A selected value that is not among them anymore is cleared
    /// (and the caller told so).
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if !self.value.is_empty() && self.selected_option().is_none() {
            tracing::debug!(
                field = %self.config.name,
                stale = %self.value,
                "selected value dropped from options"
            );
            self.value.clear();
            self.listener.on_change("");
        }
        let total = self.filterable_options().len();
        self.filter_window.set_total(total);
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == self.value)
    }

    /// Label of the selected option, or the placeholder.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.selected_option()
            .map_or(self.config.placeholder.as_str(), |option| option.label.as_str())
    }

    /// Drives the check mark next to an option.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool { !value.is_empty() && self.value == value }
}
