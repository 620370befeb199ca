use std::fmt;

use crate::{error::RuntimeError, interpreter::tokenizer::Token};

/// The canonical spelling of the true boolean literal.
pub const TRUE_LITERAL: &str = "TRUE";
/// The canonical spelling of the false boolean literal.
pub const FALSE_LITERAL: &str = "FALSE";

/// A runtime value held by a variable.
///
/// The kind of a value is fixed by its first binding and never changes
/// through compound assignment; an operator applied to a variable of the
/// wrong kind is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed integer, such as `42` or `-7`.
    Integer(i64),
    /// A boolean, written `TRUE` or `FALSE` in source.
    Boolean(bool),
    /// A string; the payload is stored without quote markers.
    Str(String),
}

impl Value {
    /// Classifies a declaration operand as a literal and builds its value.
    ///
    /// A quote-delimited token becomes a string, the exact spellings `TRUE`
    /// and `FALSE` become booleans, and anything else must parse as a
    /// base-10 integer with an optional leading `-`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidIntegerLiteral`] when the token is
    /// none of the above and is not valid integer text.
    pub fn from_literal(token: &Token, line: usize) -> Result<Self, RuntimeError> {
        if token.is_quoted() {
            return Ok(Self::Str(token.unquoted().to_string()));
        }

        match token.text() {
            TRUE_LITERAL => Ok(Self::Boolean(true)),
            FALSE_LITERAL => Ok(Self::Boolean(false)),
            literal => parse_integer_literal(literal, line).map(Self::Integer),
        }
    }

    /// Returns the integer payload of the value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::InvalidIntegerLiteral`] for non-integer
    /// values, carrying their display text as the offending literal.
    pub fn as_integer(&self, line: usize) -> Result<i64, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(RuntimeError::InvalidIntegerLiteral { literal: other.to_string(),
                                                               line }),
        }
    }

    /// Returns the display text of the value without quote markers, as used
    /// on either side of a string concatenation.
    #[must_use]
    pub fn bare_text(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(true) => f.write_str(TRUE_LITERAL),
            Self::Boolean(false) => f.write_str(FALSE_LITERAL),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Parses a base-10 integer literal, with an optional leading `-`.
///
/// # Errors
/// Returns [`RuntimeError::InvalidIntegerLiteral`] if the text does not
/// parse. This is the one unrecoverable failure in the language.
pub fn parse_integer_literal(literal: &str, line: usize) -> Result<i64, RuntimeError> {
    literal.parse()
           .map_err(|_| RuntimeError::InvalidIntegerLiteral { literal: literal.to_string(),
                                                              line })
}
