//! # Terminal Input Helper
//!
//! This module provides utilities for interacting with the terminal to
//! request user input. It repeatedly prompts the user until the input can be
//! masked cleanly, printing the formatter's error message on each rejected
//! attempt.
//!
//! The core functionality relies on [`MaskFormatter`] for the actual
//! substitution.
//!
//! ## Example
//! ```rust,no_run
//! use maskfmt_core::utils::{Terminal, ValueType};
//!
//! let phone = Terminal::ask_masked(
//!     "Enter a phone number:",
//!     "(###) ###-####",
//!     ValueType::Number,
//! );
//! println!("Formatted: {}", phone.answer);
//! ```
use crate::utils::filter::ValueType;
use crate::utils::mask::MaskFormatter;
use std::io;

/// A helper for repeatedly asking the user for input until it masks cleanly.
/// Internally calls [`MaskFormatter::format_as`].
pub struct Terminal {
    pub answer: String,
}

impl Terminal {
    /// Prints a question and loops until a non-empty line is received.
    /// Returns a [`Terminal`] struct containing the trimmed answer.
    pub fn ask(question: &str) -> Terminal {
        let answer: String = loop {
            println!("{}", question);
            let mut answer = String::new();

            match io::stdin().read_line(&mut answer) {
                Ok(_) => {
                    let clean = answer.trim();
                    if clean.is_empty() {
                        println!("Nothing was typed, try again!");
                        continue;
                    }
                    break clean.to_string();
                }
                Err(_) => {
                    eprintln!("Couldn't read line..");
                    continue;
                }
            };
        };

        Terminal { answer }
    }

    /// Prints a question and loops until the typed value formats successfully
    /// against `template`. Returns a [`Terminal`] struct containing the
    /// masked answer.
    pub fn ask_masked(question: &str, template: &str, value_type: ValueType) -> Terminal {
        let answer: String = loop {
            println!("{}", question);
            let mut answer = String::new();

            match io::stdin().read_line(&mut answer) {
                Ok(_) => {
                    match MaskFormatter::format_as(template, answer.trim(), value_type) {
                        Ok(masked) => break masked,
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    }
                }
                Err(_) => {
                    eprintln!("Couldn't read line..");
                    continue;
                }
            };
        };

        Terminal { answer }
    }
}
