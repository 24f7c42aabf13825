// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keystroke normalization. Pure functions of `(raw text, kind, bounds)`.

use crate::{InputKind, NumericBounds};

/// Rewrites raw keystroke text into the string that goes into the field's buffer.
///
/// - [`InputKind::Phone`]: keeps digits, and a `+` only when it leads the output.
/// - [`InputKind::Numeric`]: keeps digits, parses them as an integer and clamps it into
///   `bounds`. No digits at all gives an empty string. A run of digits too large for an
///   `i64` saturates at [`i64::MAX`] before clamping.
/// - Every other kind passes through unchanged.
///
/// ```
/// use component_kit::{format_input, InputKind, NumericBounds};
///
/// let bounds = NumericBounds::try_new(Some(0), Some(10)).unwrap();
/// assert_eq!(format_input("55", InputKind::Numeric, bounds), "10");
/// assert_eq!(format_input("+39 (333) 12", InputKind::Phone, bounds), "+3933312");
/// assert_eq!(format_input("a b", InputKind::Text, bounds), "a b");
/// ```
#[must_use]
pub fn format_input(raw: &str, kind: InputKind, bounds: NumericBounds) -> String {
    match kind {
        InputKind::Phone => format_phone(raw),
        InputKind::Numeric => format_numeric(raw, bounds),
        InputKind::Text
        | InputKind::TextArea
        | InputKind::Email
        | InputKind::Password
        | InputKind::Search => raw.to_string(),
    }
}

fn format_phone(raw: &str) -> String {
    let mut acc = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_digit() || (ch == '+' && acc.is_empty()) {
            acc.push(ch);
        }
    }
    acc
}

fn format_numeric(raw: &str, bounds: NumericBounds) -> String {
    let digits = raw
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();

    if digits.is_empty() {
        return String::new();
    }

    // Only overflow can fail here, the string is all ASCII digits.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    bounds.clamp(value).to_string()
}
