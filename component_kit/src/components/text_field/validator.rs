// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pattern validation per [`InputKind`].
//!
//! A failed validation is a normal outcome, it is reported as `false`, and the caller
//! decides what (localized) text to show. Whether a field is *required* is a separate
//! concern owned by the caller, so an empty string always validates.

use std::sync::LazyLock;

use regex::Regex;

use crate::InputKind;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,14}$").expect("Invalid phone regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

/// Whether validation runs at all for a field. When [`ValidationMode::Disabled`] the
/// validator is never invoked and no validity signal is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Enabled,
    Disabled,
}

impl ValidationMode {
    /// Returns [None] when validation is disabled, otherwise the outcome of [`validate`].
    #[must_use]
    pub fn run(self, kind: InputKind, candidate: &str) -> Option<bool> {
        match self {
            Self::Enabled => Some(validate(kind, candidate)),
            Self::Disabled => None,
        }
    }
}

/// Returns `true` if `candidate` is acceptable for `kind`.
///
/// | Kind                                 | Passes when                           |
/// |--------------------------------------|---------------------------------------|
/// | `Text`, `TextArea`, `Numeric`, `Search` | always                             |
/// | `Email`                              | `local@domain.tld` shape              |
/// | `Phone`                              | optional `+`, then 10 to 14 digits    |
/// | `Password`                           | 8+ chars, a letter and a digit        |
///
/// The empty string passes for every kind.
#[must_use]
pub fn validate(kind: InputKind, candidate: &str) -> bool {
    if candidate.is_empty() {
        return true;
    }
    match kind {
        InputKind::Text | InputKind::TextArea | InputKind::Numeric | InputKind::Search => {
            true
        }
        InputKind::Email => EMAIL_REGEX.is_match(candidate),
        InputKind::Phone => PHONE_REGEX.is_match(candidate),
        InputKind::Password => is_strong_password(candidate),
    }
}

fn is_strong_password(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_PASSWORD_LEN
        && candidate.chars().any(char::is_alphabetic)
        && candidate.chars().any(|ch| ch.is_ascii_digit())
}
