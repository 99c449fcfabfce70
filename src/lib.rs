//! Library crate for lualit.
//!
//! Validates and evaluates Lua literal expressions: `nil`, booleans,
//! numerals, strings, table constructors, parenthesised expressions and the
//! unary `-` and `not` operators. Text is never executed; a literal either
//! decodes to a [`Value`] or is rejected with a [`Blame`] naming the most
//! specific sub-expression at fault.
//!
//! # Examples
//!
//! ```
//! use lualit::{Value, evaluate, is_valid};
//!
//! assert!(is_valid("{1, x = 'two', [3] = {}}"));
//! assert_eq!(evaluate("-0x10"), Ok(Value::Integer(-16)));
//! assert_eq!(
//!     evaluate("{1 1}").map_err(|err| err.to_string()),
//!     Err("Invalid TableConstructorExpression: {1 1}".to_owned())
//! );
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod tokenizer;
pub mod value;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use error::{Blame, EvaluationError};
pub use parser::{Expression, ExpressionKind, GenericExpression};
pub use value::Value;

/// Whether `text` is a valid literal expression of any kind.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    GenericExpression::new(text).is_valid()
}

/// Decode the value of the literal expression in `text`.
///
/// # Errors
/// Returns [`EvaluationError::InvalidExpression`] when `text` is not a valid
/// literal, blaming the most specific rejected sub-expression.
pub fn evaluate(text: &str) -> Result<Value, EvaluationError> {
    GenericExpression::new(text).evaluate()
}
