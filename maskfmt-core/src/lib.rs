//! # MaskFmt Core
//!
//! This crate provides a small input masking framework for CLI and
//! form-driven applications.
//!
//! The main idea is that you describe the shape of a value with a **template**
//! (`#` marks a slot, everything else is a literal separator), pick a
//! [`ValueType`](utils::ValueType) describing which characters of the raw
//! input are worth keeping, and let [`MaskFormatter`](utils::MaskFormatter)
//! overlay the sanitized characters onto the template.
//!
//! ## Features
//! - Type-aware sanitization (`number` keeps digits, `text` keeps word characters).
//! - Left-to-right single-pass substitution with truncation at the first
//!   unfilled slot.
//! - Dangling separators are stripped, so a half-filled `###-###` never ends
//!   in a lone `-`.
//! - Friendly error messages for empty templates and values.
//! - Interactive terminal helper that re-prompts until the input masks cleanly.
//!
//! ## Example
//! ```rust
//! use maskfmt_core::utils::{MaskFormatter, ValueType};
//!
//! let phone = MaskFormatter::format_as("(###) ###-####", "555 123 4567", ValueType::Number);
//! assert_eq!(phone.unwrap(), "(555) 123-4567");
//! ```

pub mod utils;
