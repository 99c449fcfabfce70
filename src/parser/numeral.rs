//! Decimal integers, hexadecimal integers and decimal floats.
//!
//! Integer overflow follows Lua 5.3: a decimal integer too large for `i64`
//! becomes a float, and a hexadecimal integer wraps around modulo 2^64.

use log::warn;

use crate::error::Blame;
use crate::tokenizer::{NumeralForm, classify_numeral};
use crate::value::Value;

use super::{Expression, ExpressionKind, Resolved};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralExpression<'a> {
    raw: &'a str,
}

impl<'a> NumeralExpression<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { raw: raw.trim() }
    }

    /// One or more decimal digits.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.form() == Some(NumeralForm::Int)
    }

    /// `0x`/`0X` followed by one or more hex digits.
    #[must_use]
    pub fn is_hex_int(&self) -> bool {
        self.form() == Some(NumeralForm::HexInt)
    }

    /// Digits with a decimal point or an exponent.
    #[must_use]
    pub fn is_float(&self) -> bool {
        self.form() == Some(NumeralForm::Float)
    }

    pub(crate) fn form(&self) -> Option<NumeralForm> {
        classify_numeral(self.raw)
    }
}

impl<'a> Expression<'a> for NumeralExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::Numeral
    }

    fn raw(&self) -> &'a str {
        self.raw
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        self.form()
            .map(|form| Resolved::numeral(form, self.raw))
            .ok_or_else(|| self.blame())
    }
}

/// Value of a numeral already classified as `form`.
pub(crate) fn value(form: NumeralForm, text: &str) -> Value {
    match form {
        NumeralForm::Int => text
            .parse::<i64>()
            .map_or_else(|_| float_value(text), Value::Integer),
        NumeralForm::HexInt => Value::Integer(hex_value(text)),
        NumeralForm::Float => float_value(text),
    }
}

/// Arithmetic negation of a numeral value.
#[expect(clippy::float_arithmetic, reason = "unary minus on a float numeral")]
pub(crate) fn negate(value: Value) -> Value {
    match value {
        Value::Integer(n) => Value::Integer(n.wrapping_neg()),
        Value::Float(x) => Value::Float(-x),
        other => other,
    }
}

/// Out-of-range floats parse to infinity or zero rather than failing.
fn float_value(text: &str) -> Value {
    // The lexer only passes `f64` syntax, so a parse error is a lexer bug.
    text.parse::<f64>().map_or_else(
        |err| {
            warn!("float numeral {text:?} rejected by f64 parser: {err}");
            Value::Float(f64::NAN)
        },
        Value::Float,
    )
}

#[expect(clippy::cast_possible_wrap, reason = "hex numerals wrap modulo 2^64")]
fn hex_value(text: &str) -> i64 {
    let digits = text.get(2..).unwrap_or_default();
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0_u64, |acc, d| acc.wrapping_mul(16).wrapping_add(u64::from(d)));
    magnitude as i64
}
