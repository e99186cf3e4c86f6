//! # Mask Formatting
//!
//! This module overlays sanitized input onto a character template. A template
//! is an ordinary string in which every [`PLACEHOLDER`] (`#`) marks a slot to
//! be filled by one character of the input; everything else (parentheses,
//! hyphens, spaces) is copied through as a literal separator.
//!
//! The substitution is a single left-to-right pass. When the input runs out
//! before the slots do, the result is cut at the first unfilled slot and any
//! dangling separator is stripped, so `###-###` fed only `123` yields `123`
//! rather than `123-`. Extra input beyond the available slots is silently
//! discarded.
//!
//! ## Example
//! ```rust
//! use maskfmt_core::utils::{MaskFormatter, ValueType};
//!
//! let phone = MaskFormatter::format_as("(###) ###-####", "5551234567", ValueType::Number);
//! assert_eq!(phone.unwrap(), "(555) 123-4567");
//!
//! let code = MaskFormatter::format_as("##-##", "ab!cd", ValueType::Text);
//! assert_eq!(code.unwrap(), "ab-cd");
//! ```
use crate::utils::filter::ValueType;
use std::{error::Error, fmt::Display};

/// The reserved template character marking a slot to be filled.
pub const PLACEHOLDER: char = '#';

/// Applies character templates to sanitized input.
///
/// Stateless; every call is a pure function of its arguments, so a single
/// `MaskFormatter` is safe to use from any number of callers at once.
pub struct MaskFormatter;

/// Represents possible errors when formatting against a mask.
///
/// Both variants are call-boundary misuse (a missing argument), raised before
/// any sanitization runs. A value that merely *sanitizes* to nothing is not
/// an error: it produces an empty result string.
#[derive(Debug, PartialEq)]
pub enum MaskErrors {
    EmptyTemplate,
    EmptyValue,
}

impl Display for MaskErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTemplate => {
                write!(f, "The template is empty => provide a mask like ###-###")
            }
            Self::EmptyValue => {
                write!(f, "The value is empty => provide an input to mask")
            }
        }
    }
}

impl Error for MaskErrors {}

impl MaskFormatter {
    /// Formats `value` against `template` using the default [`ValueType`]
    /// (`Text`). See [`format_as`](Self::format_as).
    pub fn format(template: &str, value: &str) -> Result<String, MaskErrors> {
        Self::format_as(template, value, ValueType::default())
    }

    /// Formats `value` against `template`.
    ///
    /// - Rejects an empty `template` or `value` before sanitization.
    /// - Sanitizes `value` per `value_type`; if nothing survives, returns an
    ///   empty string without touching the template.
    /// - Fills `#` slots left to right, one sanitized character each. Excess
    ///   characters are discarded; the result is cut at the first unfilled
    ///   slot, trimmed, and stripped of one dangling separator.
    pub fn format_as(
        template: &str,
        value: &str,
        value_type: ValueType,
    ) -> Result<String, MaskErrors> {
        if template.is_empty() {
            return Err(MaskErrors::EmptyTemplate);
        }
        if value.is_empty() {
            return Err(MaskErrors::EmptyValue);
        }

        let sanitized = value_type.sanitize(value);
        if sanitized.is_empty() {
            return Ok(sanitized);
        }

        let mut letters = sanitized.chars();
        let mut filled = String::with_capacity(template.len());

        for slot in template.chars() {
            if slot != PLACEHOLDER {
                filled.push(slot);
                continue;
            }
            match letters.next() {
                Some(letter) => filled.push(letter),
                // First unfilled slot is the cut point.
                None => break,
            }
        }

        let cut = filled.trim();
        let result = match cut.chars().last() {
            // A lone separator left dangling by the cut is dropped.
            Some(last) if !ValueType::Text.allows(last) => &cut[..cut.len() - last.len_utf8()],
            _ => cut,
        };

        Ok(result.to_string())
    }
}
