//! Assertion helpers for verifying expression outcomes in tests.

use crate::parser::{Expression, ExpressionKind};
use crate::value::Value;

/// Assert that `expr` is valid and evaluates to `expected`.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use lualit::parser::NumeralExpression;
/// use lualit::{Value, test_util::assert_evaluates};
///
/// assert_evaluates(&NumeralExpression::new("0x10"), &Value::Integer(16));
/// # }
/// ```
///
/// # Panics
/// Panics if `expr` is invalid or decodes to a different value.
#[track_caller]
pub fn assert_evaluates<'a, E: Expression<'a>>(expr: &E, expected: &Value) {
    assert!(
        expr.is_valid(),
        "expected {:?} to be valid, got {:?}",
        expr.raw(),
        expr.invalid_reason()
    );
    match expr.evaluate() {
        Ok(value) => assert_eq!(&value, expected, "value of {:?}", expr.raw()),
        Err(err) => panic!("valid expression {:?} failed to evaluate: {err}", expr.raw()),
    }
}

/// Assert that `expr` is invalid and its rejection message is `reason`.
///
/// # Panics
/// Panics if `expr` is valid or a different sub-expression is blamed.
#[track_caller]
pub fn assert_rejected<'a, E: Expression<'a>>(expr: &E, reason: &str) {
    assert!(!expr.is_valid(), "expected {:?} to be invalid", expr.raw());
    assert_eq!(expr.invalid_reason().as_deref(), Some(reason));
}

/// Assert that evaluating `expr` fails, blaming a sub-expression of `kind`
/// spanning `raw`.
///
/// # Panics
/// Panics if `expr` evaluates or the blame names a different expression.
#[track_caller]
#[expect(clippy::expect_used, reason = "test helpers use expect for clarity")]
pub fn assert_rejected_as<'a, E: Expression<'a>>(expr: &E, kind: ExpressionKind, raw: &str) {
    let err = expr
        .evaluate()
        .err()
        .expect("invalid expression should not evaluate");
    assert_eq!(err.blame().kind(), kind, "blamed kind for {:?}", expr.raw());
    assert_eq!(err.blame().raw(), raw, "blamed text for {:?}", expr.raw());
}
