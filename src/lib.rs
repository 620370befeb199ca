//! # skit
//!
//! skit is a line-oriented interpreter for a tiny scripting language with
//! three value kinds: integers, booleans, and strings. Lines are tokenized
//! and evaluated one at a time against a persistent variable environment;
//! there is no syntax tree, no operator precedence, no control flow, and no
//! user-defined functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{env::Environment, evaluator::core::eval_line, tokenizer::tokenize};

/// Provides unified error types for the interpreter.
///
/// This module defines all errors that can be raised while evaluating a
/// script. The only fatal failure mode in the language is a malformed
/// integer literal; every other malformed statement is a silent no-op and
/// never surfaces as an error.
///
/// # Responsibilities
/// - Defines the error enum for all fatal failure modes.
/// - Attaches line numbers and the offending text for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together the tokenizer, the value and environment
/// models, and the statement evaluator to provide a complete runtime for
/// line-oriented scripts. It exposes the building blocks used by
/// [`interpret`].
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, values, environment, and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets a complete script, writing `PRINT` output to `out`.
///
/// Every line of `source` is tokenized and evaluated in order against a
/// single mutable variable environment that lives for the whole run.
/// Evaluation of a line completes, including any output it produces, before
/// the next line is considered.
///
/// # Errors
/// Returns an error if an integer literal fails to parse as base-10 text, or
/// if writing to `out` fails. Any other statement that matches no pattern is
/// a silent no-op, not an error.
///
/// # Examples
/// ```
/// let mut out = Vec::new();
///
/// let res = skit::interpret("x = 5\nx += 3\nPRINT x", &mut out);
/// assert!(res.is_ok());
/// assert_eq!(out, b"x=8\n");
///
/// // A malformed integer literal is the one fatal failure mode.
/// let res = skit::interpret("x = 12a3", &mut Vec::new());
/// assert!(res.is_err());
/// ```
pub fn interpret<W: Write>(source: &str, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let mut env = Environment::new();

    for (number, line) in source.lines().enumerate() {
        let tokens = tokenize(line);
        eval_line(&tokens, &mut env, out, number + 1)?;
    }

    Ok(())
}
