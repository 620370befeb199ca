#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An integer literal was not valid base-10 text.
    InvalidIntegerLiteral {
        /// The text that failed to parse.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIntegerLiteral { literal, line } => {
                write!(f, "Error on line {line}: Invalid integer literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
