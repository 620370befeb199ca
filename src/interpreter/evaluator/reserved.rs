use std::io::{self, Write};

use crate::interpreter::{env::Environment, tokenizer::Token};

/// The one reserved word of the language, recognized positionally as the
/// first token of a line.
pub const PRINT: &str = "PRINT";

/// Attempts the reserved-word interpretation of a line: `PRINT name`.
///
/// When the first token is `PRINT` and the second names a bound variable,
/// writes a line of the form `name=value` with the value in its canonical
/// display form: integers as decimal, booleans as `TRUE`/`FALSE`, strings
/// with their quote markers. An unbound name is silently inert.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn eval_reserved_words<W: Write>(tokens: &[Token],
                                     env: &Environment,
                                     out: &mut W)
                                     -> io::Result<()> {
    if tokens.len() < 2 {
        return Ok(());
    }

    if tokens[0].text() == PRINT {
        let name = tokens[1].text();
        if let Some(value) = env.get(name) {
            writeln!(out, "{name}={value}")?;
        }
    }

    Ok(())
}
