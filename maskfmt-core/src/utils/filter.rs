//! # Value Type Filtering
//!
//! This module defines the sanitization side of masking: before any template
//! slot is filled, the raw value is run through a character filter selected
//! by a [`ValueType`]. Characters outside the allowed class are deleted and
//! the remainder is trimmed, so the formatter only ever sees material worth
//! placing into a slot.
//!
//! ## Features
//! - Digit-only filtering with [`ValueType::Number`]
//! - Word-character filtering (alphanumerics and `_`) with [`ValueType::Text`]
//! - Explicit character-class predicates via [`ValueType::allows`], no regex
//! - Parsing from user-facing names (`"number"` / `"text"`) via `FromStr`
//!
//! ## Example
//! ```rust
//! use maskfmt_core::utils::ValueType;
//!
//! assert_eq!(ValueType::Number.sanitize(" 12a3-4 "), "1234");
//! assert_eq!(ValueType::Text.sanitize("ab!cd"), "abcd");
//! ```
use std::{error::Error, fmt::Display, str::FromStr};

/// Selects which characters of a raw value survive sanitization.
///
/// - `Number`: keeps ASCII decimal digits only.
/// - `Text`: keeps word characters, i.e. ASCII alphanumerics and `_`.
///
/// The default is `Text`. Parsing and `Display` use the lowercase names
/// `"number"` and `"text"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueType {
    Number,
    #[default]
    Text,
}

impl ValueType {
    /// Character-class predicate behind [`sanitize`](Self::sanitize).
    pub fn allows(&self, c: char) -> bool {
        match self {
            Self::Number => c.is_ascii_digit(),
            Self::Text => c.is_ascii_alphanumeric() || c == '_',
        }
    }

    /// Deletes every character the type disallows, then trims surrounding
    /// whitespace. Idempotent: sanitizing a sanitized value is a no-op.
    pub fn sanitize(&self, raw: &str) -> String {
        let kept: String = raw.chars().filter(|c| self.allows(*c)).collect();
        kept.trim().to_string()
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number => write!(f, "number"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Represents an error when parsing a [`ValueType`] from a string.
///
/// Carries the rejected input so callers can echo it back to the user.
#[derive(Debug, PartialEq)]
pub struct ValueTypeParseError(pub String);

impl Display for ValueTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is not a value type => number or text, try again!",
            self.0
        )
    }
}

impl Error for ValueTypeParseError {}

impl FromStr for ValueType {
    type Err = ValueTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clean = s.trim();
        if clean.eq_ignore_ascii_case("number") {
            Ok(ValueType::Number)
        } else if clean.eq_ignore_ascii_case("text") {
            Ok(ValueType::Text)
        } else {
            Err(ValueTypeParseError(clean.to_string()))
        }
    }
}

impl TryFrom<&str> for ValueType {
    type Error = ValueTypeParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keeps_digits_only() {
        assert_eq!(ValueType::Number.sanitize("555-123.4567"), "5551234567");
        assert_eq!(ValueType::Number.sanitize("abc"), "");
    }

    #[test]
    fn test_text_keeps_word_characters() {
        assert_eq!(ValueType::Text.sanitize("ab!cd"), "abcd");
        assert_eq!(ValueType::Text.sanitize("user name_1 "), "username_1");
        assert_eq!(ValueType::Text.sanitize("!!!"), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = ValueType::Number.sanitize(" 12a3-4 ");
        assert_eq!(ValueType::Number.sanitize(&once), once);

        let once = ValueType::Text.sanitize("a b_c!");
        assert_eq!(ValueType::Text.sanitize(&once), once);
    }

    #[test]
    fn test_allows_predicate() {
        assert!(ValueType::Number.allows('7'));
        assert!(!ValueType::Number.allows('a'));
        assert!(!ValueType::Number.allows('-'));

        assert!(ValueType::Text.allows('a'));
        assert!(ValueType::Text.allows('7'));
        assert!(ValueType::Text.allows('_'));
        assert!(!ValueType::Text.allows('-'));
        assert!(!ValueType::Text.allows(' '));
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!("number".parse::<ValueType>().unwrap(), ValueType::Number);
        assert_eq!("Text".parse::<ValueType>().unwrap(), ValueType::Text);
        assert_eq!(" NUMBER ".parse::<ValueType>().unwrap(), ValueType::Number);
        assert_eq!(ValueType::try_from("text").unwrap(), ValueType::Text);
    }

    #[test]
    fn test_parse_fail_message() {
        let res = "digits".parse::<ValueType>();
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "'digits' is not a value type => number or text, try again!"
            );
        }
    }

    #[test]
    fn test_display_round_trips_with_parse() {
        for ty in [ValueType::Number, ValueType::Text] {
            assert_eq!(format!("{}", ty).parse::<ValueType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(ValueType::default(), ValueType::Text);
    }
}
