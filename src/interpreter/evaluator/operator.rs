use crate::interpreter::{
    env::Environment,
    evaluator::core::EvalResult,
    tokenizer::Token,
    value::{parse_integer_literal, Value, TRUE_LITERAL},
};

/// Attempts the operator interpretation of a line: `target op operand`.
///
/// The cases are mutually exclusive and tried in priority order:
///
/// 1. `=` with an unbound target declares it, fixing its kind.
/// 2. `=` with a bound target copies the value of a bound operand name.
/// 3. `+=` on a string target concatenates a quoted operand or the value of
///    a bound name.
/// 4. `+=` on an integer target adds an unquoted integer operand.
/// 5. `*=` on an integer target multiplies, analogous to addition.
/// 6. `&=` on a boolean target ANDs with `operand == TRUE`.
///
/// A line that matches none of the cases is left deliberately inert: no
/// mutation, no diagnostic.
///
/// # Errors
/// Returns [`crate::error::RuntimeError::InvalidIntegerLiteral`] when a
/// declaration or an arithmetic operand is not valid base-10 text.
pub fn eval_operator_statement(tokens: &[Token],
                               env: &mut Environment,
                               line: usize)
                               -> EvalResult<()> {
    if tokens.len() < 3 {
        return Ok(());
    }

    let target = tokens[0].text();
    let operand = &tokens[2];

    match tokens[1].text() {
        "=" if !env.is_bound(target) => declare(target, operand, env, line),
        "=" => {
            // Copy-assignment, replacing the kind of the target. An unbound
            // operand name leaves the target untouched.
            if let Some(value) = env.get(operand.text()).cloned() {
                env.bind(target, value);
            }
            Ok(())
        },
        "+=" => match env.get(target).cloned() {
            Some(Value::Str(current)) if operand.is_quoted() || env.is_bound(operand.text()) => {
                let suffix = match env.get(operand.text()) {
                    Some(value) => value.bare_text(),
                    None => operand.unquoted().to_string(),
                };
                env.bind(target, Value::Str(current + &suffix));
                Ok(())
            },
            Some(Value::Integer(current)) if !operand.is_quoted() => {
                let addend = resolve_integer(operand, env, line)?;
                env.bind(target, Value::Integer(current.wrapping_add(addend)));
                Ok(())
            },
            _ => Ok(()),
        },
        "*=" => {
            if let Some(Value::Integer(current)) = env.get(target) {
                let current = *current;
                let factor = resolve_integer(operand, env, line)?;
                env.bind(target, Value::Integer(current.wrapping_mul(factor)));
            }
            Ok(())
        },
        "&=" => {
            if let Some(Value::Boolean(current)) = env.get(target) {
                let result = *current && operand.text() == TRUE_LITERAL;
                env.bind(target, Value::Boolean(result));
            }
            Ok(())
        },
        // No case matched: the line is deliberately inert.
        _ => Ok(()),
    }
}

/// Declaration-assignment: binds an unbound target, fixing its kind.
///
/// An operand that names a bound variable is copied; anything else is
/// classified as a literal.
fn declare(target: &str, operand: &Token, env: &mut Environment, line: usize) -> EvalResult<()> {
    let value = match env.get(operand.text()) {
        Some(existing) => existing.clone(),
        None => Value::from_literal(operand, line)?,
    };
    env.bind(target, value);

    Ok(())
}

/// Resolves an arithmetic operand to an integer: the value of a bound name,
/// or the token itself parsed as an integer literal.
fn resolve_integer(operand: &Token, env: &Environment, line: usize) -> EvalResult<i64> {
    match env.get(operand.text()) {
        Some(value) => value.as_integer(line),
        None => parse_integer_literal(operand.text(), line),
    }
}
