//! Shared test utilities for integration tests.
//!
//! These helpers build expected values and assert over evaluation results.
//! They mirror a subset of the `lualit::test_util` module without requiring
//! the `test-support` feature, enabling integration tests to compile against
//! the published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use lualit::{ExpressionKind, Value};

/// Construct a [`Value::Integer`].
#[must_use]
pub const fn int(n: i64) -> Value {
    Value::Integer(n)
}

/// Construct a [`Value::String`].
#[must_use]
pub fn str_val(s: &str) -> Value {
    Value::from(s)
}

/// Construct a table with no fields.
#[must_use]
pub const fn empty_table() -> Value {
    Value::Table(Vec::new())
}

/// Construct a [`Value::Table`] from key/value pairs in source order.
#[must_use]
pub fn table<K, V, I>(pairs: I) -> Value
where
    K: Into<Value>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    Value::Table(
        pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect(),
    )
}

/// Assert that `src` is valid and evaluates to `expected`.
///
/// # Panics
/// Panics if `src` is rejected or decodes to a different value.
#[track_caller]
pub fn assert_evaluates(src: &str, expected: &Value) {
    assert!(lualit::is_valid(src), "expected {src:?} to be valid");
    match lualit::evaluate(src) {
        Ok(value) => assert_eq!(&value, expected, "value of {src:?}"),
        Err(err) => panic!("valid literal {src:?} failed to evaluate: {err}"),
    }
}

/// Assert that `src` is rejected, blaming an expression of `kind` spanning
/// `raw`.
///
/// # Panics
/// Panics if `src` evaluates or a different expression is blamed.
#[track_caller]
pub fn assert_rejected_as(src: &str, kind: ExpressionKind, raw: &str) {
    assert!(!lualit::is_valid(src), "expected {src:?} to be invalid");
    match lualit::evaluate(src) {
        Ok(value) => panic!("invalid literal {src:?} evaluated to {value}"),
        Err(err) => {
            assert_eq!(err.blame().kind(), kind, "blamed kind for {src:?}");
            assert_eq!(err.blame().raw(), raw, "blamed text for {src:?}");
        }
    }
}
