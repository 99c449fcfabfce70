//! Integration tests for validating and evaluating literal expressions.
//!
//! These tests exercise the public `is_valid` and `evaluate` functions by
//! feeding them standalone literals of every kind and verifying the decoded
//! values and the blamed sub-expressions.

mod test_util;

use lualit::{ExpressionKind, Value};
use rstest::rstest;
use test_util::{assert_evaluates, assert_rejected_as, int, str_val};

#[rstest]
#[case("nil", Value::Nil)]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("  true\n", Value::Boolean(true))]
fn evaluates_basic_literals(#[case] src: &str, #[case] expected: Value) {
    assert_evaluates(src, &expected);
}

#[rstest]
#[case("3", int(3))]
#[case("345", int(345))]
#[case("0xff", int(255))]
#[case("0xBEBADA", int(12_499_674))]
#[case("3.0", Value::Float(3.0))]
#[case("3.1416", Value::Float(3.1416))]
#[case("314.16e-2", Value::Float(3.1416))]
#[case("0.31416E1", Value::Float(3.1416))]
#[case("34e1", Value::Float(340.0))]
#[case(".1", Value::Float(0.1))]
#[case("9223372036854775807", int(i64::MAX))]
#[case("9223372036854775808", Value::Float(9_223_372_036_854_775_808.0))]
#[case("0xffffffffffffffff", int(-1))]
#[case("0x10000000000000001", int(1))]
#[case("1e400", Value::Float(f64::INFINITY))]
fn evaluates_numerals(#[case] src: &str, #[case] expected: Value) {
    assert_evaluates(src, &expected);
}

#[rstest]
#[case(r#""""#, "")]
#[case("''", "")]
#[case(r#"'alo\n123"'"#, "alo\n123\"")]
#[case(r#""alo\n123\"""#, "alo\n123\"")]
#[case(r#"'\97lo\10\04923"'"#, "alo\n123\"")]
#[case("[[alo\n123\"]]", "alo\n123\"")]
#[case("[==[\nalo\n123\"]==]", "alo\n123\"")]
#[case(r#""tab\there\\""#, "tab\there\\")]
#[case(r#""\x41\x62""#, "Ab")]
#[case(r#""\q\r\v""#, "\\q\r\u{b}")]
fn evaluates_strings(#[case] src: &str, #[case] expected: &str) {
    assert_evaluates(src, &str_val(expected));
}

#[rstest]
#[case(r#"("hello")"#, str_val("hello"))]
#[case("(123)", int(123))]
#[case("(nil)", Value::Nil)]
#[case("-1", int(-1))]
#[case("-1.234", Value::Float(-1.234))]
#[case("not true", Value::Boolean(false))]
#[case("not nil", Value::Boolean(true))]
#[case("(not false)", Value::Boolean(true))]
#[case("-0x8000000000000000", int(i64::MIN))]
fn evaluates_prefix_and_unary(#[case] src: &str, #[case] expected: Value) {
    assert_evaluates(src, &expected);
}

#[rstest]
#[case("", ExpressionKind::Generic, "")]
#[case("   ", ExpressionKind::Generic, "")]
#[case("1.1.1", ExpressionKind::Generic, "1.1.1")]
#[case("abc", ExpressionKind::Generic, "abc")]
#[case("False", ExpressionKind::Generic, "False")]
#[case("3_", ExpressionKind::Generic, "3_")]
#[case(r#""\'"#, ExpressionKind::Generic, r#""\'"#)]
#[case("'''", ExpressionKind::Generic, "'''")]
#[case("[=[foo]==]", ExpressionKind::Generic, "[=[foo]==]")]
#[case("[=[bar]]", ExpressionKind::Generic, "[=[bar]]")]
#[case(r#""\""#, ExpressionKind::Generic, r#""\""#)]
#[case("{{}", ExpressionKind::TableConstructor, "{{}")]
#[case("{1 1 2}", ExpressionKind::TableConstructor, "{1 1 2}")]
#[case("()", ExpressionKind::Prefix, "()")]
#[case("((123)", ExpressionKind::Prefix, "((123)")]
#[case(r#"-"hello""#, ExpressionKind::Numeral, r#""hello""#)]
#[case("-nil", ExpressionKind::Numeral, "nil")]
#[case("not 0", ExpressionKind::Basic, "0")]
#[case("-", ExpressionKind::UnaryOperator, "-")]
fn rejects_invalid_literals(#[case] src: &str, #[case] kind: ExpressionKind, #[case] raw: &str) {
    assert_rejected_as(src, kind, raw);
}

#[test]
fn error_message_names_blamed_expression() {
    let message = lualit::evaluate("({x = -true})").map_err(|err| err.to_string());
    assert_eq!(message, Err("Invalid NumeralExpression: true".to_owned()));
}

#[rstest]
#[case("-0x8000000000000000")]
#[case("0x8000000000000000")]
#[case("{[-0x8000000000000000] = -9223372036854775807}")]
fn rendered_extreme_integers_evaluate_back(#[case] src: &str) {
    let value =
        lualit::evaluate(src).unwrap_or_else(|err| panic!("{src} should evaluate: {err}"));
    assert_eq!(lualit::evaluate(&value.to_string()), Ok(value));
}
