/// The tokenizer module splits source lines into tokens.
///
/// The tokenizer reads one raw line of text and produces an ordered sequence
/// of tokens split on whitespace, with the exception that a double-quoted
/// span counts as a single token even when it contains spaces. This is the
/// first and only analysis stage: there is no parser and no syntax tree.
///
/// # Responsibilities
/// - Converts a line into tokens, preserving quote markers on quoted spans.
/// - Distinguishes quoted spans from bare words structurally.
pub mod tokenizer;

/// The value module defines the runtime data types for evaluation.
///
/// This module declares the three value kinds a variable can hold: integers,
/// booleans, and strings. Conversion to and from display text is isolated
/// here, at the literal-parsing and output boundaries; everywhere else the
/// interpreter works with native payloads.
///
/// # Responsibilities
/// - Defines the `Value` enum and its three variants.
/// - Parses declaration literals into values.
/// - Renders values in their canonical display form.
pub mod value;

/// The env module holds the mutable variable environment.
///
/// A single environment maps variable names to values and persists across
/// all lines for the lifetime of a run. There is no scoping and no
/// shadowing; the driver owns the environment and threads it through the
/// evaluator on every line.
pub mod env;

/// The evaluator module executes tokenized lines and computes results.
///
/// The evaluator inspects the token sequence of each line and applies two
/// independent interpretations in order: operator statements (assignment and
/// compound assignment) and reserved-word statements (`PRINT`). Both are
/// always attempted; a line that matches neither is a deliberate no-op.
///
/// # Responsibilities
/// - Mutates the variable environment according to operator statements.
/// - Produces `PRINT` output in program order.
/// - Reports the single fatal error: a malformed integer literal.
pub mod evaluator;
