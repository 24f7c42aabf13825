// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Closed set of text field kinds. The kind selects the formatting policy (see
/// [`crate::format_input`]) and the validation policy (see [`crate::validate`]).
///
/// The string form of each variant is the HTML `type` attribute the kind renders as, so
/// `"tel".parse::<InputKind>()` gives [`InputKind::Phone`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumIter, EnumString,
)]
pub enum InputKind {
    #[default]
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "textarea")]
    TextArea,
    #[strum(serialize = "number")]
    Numeric,
    #[strum(serialize = "tel")]
    Phone,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "password")]
    Password,
    #[strum(serialize = "search")]
    Search,
}

impl InputKind {
    #[must_use]
    pub fn is_multi_line(self) -> bool { matches!(self, Self::TextArea) }

    /// `true` for the kinds whose keystrokes are rewritten before they reach the buffer.
    #[must_use]
    pub fn reformats_keystrokes(self) -> bool { matches!(self, Self::Numeric | Self::Phone) }

    /// Value of the `autocomplete` hint handed to the rendering primitive.
    #[must_use]
    pub fn autocomplete_hint(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Text | Self::Search => "on",
            Self::TextArea | Self::Numeric | Self::Password => "off",
        }
    }

    /// Localization key of the message shown when validation fails. Kinds without a
    /// validation pattern have no message.
    #[must_use]
    pub fn validation_message_key(self) -> Option<&'static str> {
        match self {
            Self::Email => Some("validation.email"),
            Self::Phone => Some("validation.phone"),
            Self::Password => Some("validation.password"),
            Self::Text | Self::TextArea | Self::Numeric | Self::Search => None,
        }
    }
}
