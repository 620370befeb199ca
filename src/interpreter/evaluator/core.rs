use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        env::Environment,
        evaluator::{operator, reserved},
        tokenizer::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates one tokenized line against the environment.
///
/// Both statement interpretations are attempted unconditionally and in
/// order: first the operator interpretation, which may mutate the
/// environment, then the reserved-word interpretation, which reads the
/// possibly just-mutated environment. The two pattern-match independently
/// on token content, so a single line can satisfy both.
///
/// # Errors
/// Returns an error if an integer literal fails to parse or if writing
/// `PRINT` output to `out` fails.
pub fn eval_line<W: Write>(tokens: &[Token],
                           env: &mut Environment,
                           out: &mut W,
                           line: usize)
                           -> Result<(), Box<dyn std::error::Error>> {
    operator::eval_operator_statement(tokens, env, line)?;
    reserved::eval_reserved_words(tokens, env, out)?;

    Ok(())
}
