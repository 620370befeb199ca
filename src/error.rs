/// Runtime errors.
///
/// Contains the error types that can be raised during evaluation. The
/// language has exactly one fatal failure mode: an integer literal that is
/// not valid base-10 text. Every other malformed statement is defined to be
/// a silent no-op and never produces an error.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
