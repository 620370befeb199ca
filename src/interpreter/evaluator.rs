/// Core per-line evaluation.
///
/// Coordinates the two statement interpretations applied to every line and
/// defines the result type shared by the evaluator.
pub mod core;

/// Operator statement evaluation.
///
/// Implements declaration-assignment, copy-assignment, and the compound
/// operators `+=`, `*=`, and `&=`, each guarded by the kind of the target
/// variable.
pub mod operator;

/// Reserved-word statement evaluation.
///
/// Implements the single reserved word of the language, `PRINT`, which
/// writes a bound variable in its canonical display form.
pub mod reserved;
