//! Helpers for constructing expected [`Value`]s in tests.

use crate::value::Value;

/// Construct a [`Value::Integer`].
#[must_use]
pub const fn int(n: i64) -> Value {
    Value::Integer(n)
}

/// Construct a [`Value::Float`].
#[must_use]
pub const fn float(x: f64) -> Value {
    Value::Float(x)
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
///
/// Accepts anything convertible into [`Value`] on either side.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use lualit::test_util::table;
/// let t = table([(1_i64, "a"), (2_i64, "b")]);
/// assert_eq!(t.to_string(), r#"{[1] = "a", [2] = "b"}"#);
/// # }
/// ```
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
