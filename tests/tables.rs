//! Integration tests for table constructors and nested literals.

mod test_util;

use lualit::{ExpressionKind, Value};
use rstest::rstest;
use test_util::{assert_evaluates, assert_rejected_as, empty_table, int, str_val, table};

#[rstest]
#[case("{}", empty_table())]
#[case("{1,2,3}", table([(1_i64, 1_i64), (2, 2), (3, 3)]))]
#[case("{ 1\t;2,\n3}", table([(1_i64, 1_i64), (2, 2), (3, 3)]))]
#[case("{['a'] = 1.1}", table([("a", 1.1)]))]
#[case("{{}}", table([(int(1), empty_table())]))]
#[case("{{},{}}", table([(int(1), empty_table()), (int(2), empty_table())]))]
#[case(
    "{ x = -1, y = not nil }",
    table([(str_val("x"), int(-1)), (str_val("y"), Value::Boolean(true))])
)]
fn evaluates_table_constructors(#[case] src: &str, #[case] expected: Value) {
    assert_evaluates(src, &expected);
}

#[test]
fn evaluates_deeply_nested_constructors() {
    let src = r#"{
        name = "widget",
        tags = {"a", "b"; [[c]]},
        [ {} ] = ( { 0x10 } ),
        "trailing",
    }"#;
    let expected = table([
        (str_val("name"), str_val("widget")),
        (str_val("tags"), table([(1_i64, "a"), (2, "b"), (3, "c")])),
        (empty_table(), table([(int(1), int(16))])),
        (int(1), str_val("trailing")),
    ]);
    assert_evaluates(src, &expected);
}

#[test]
fn lookup_prefers_last_duplicate_key() {
    let value = lualit::evaluate("{'first', [1] = 'second', x = 1, x = 2}")
        .unwrap_or_else(|err| panic!("table should evaluate: {err}"));
    assert_eq!(value.get(&int(1)), Some(&str_val("second")));
    assert_eq!(value.get(&str_val("x")), Some(&int(2)));
    assert_eq!(value.get(&str_val("missing")), None);
    assert_eq!(value.as_table().map(<[_]>::len), Some(4));
}

#[rstest]
#[case("{{}", ExpressionKind::TableConstructor, "{{}")]
#[case("{1 1 2}", ExpressionKind::TableConstructor, "{1 1 2}")]
#[case("[]", ExpressionKind::Generic, "[]")]
#[case("{,}", ExpressionKind::TableConstructor, "{,}")]
#[case("{1,,}", ExpressionKind::TableConstructor, "{1,,}")]
#[case("{[1] 2}", ExpressionKind::TableConstructor, "{[1] 2}")]
#[case("{{1 1}}", ExpressionKind::TableConstructor, "{1 1}")]
#[case("{-nil}", ExpressionKind::Numeral, "nil")]
#[case("{x = (1 1)}", ExpressionKind::Prefix, "(1 1)")]
#[case("{[abc] = 1}", ExpressionKind::TableConstructor, "{[abc] = 1}")]
#[case("({1 1})", ExpressionKind::TableConstructor, "{1 1}")]
fn blames_most_specific_expression(
    #[case] src: &str,
    #[case] kind: ExpressionKind,
    #[case] raw: &str,
) {
    assert_rejected_as(src, kind, raw);
}

#[test]
fn rendered_tables_evaluate_back() {
    let value = lualit::evaluate("{1.5, 'q\\n', nested = {true, nil}}")
        .unwrap_or_else(|err| panic!("table should evaluate: {err}"));
    let rendered = value.to_string();
    assert_eq!(
        rendered,
        r#"{[1] = 1.5, [2] = "q\n", ["nested"] = {[1] = true, [2] = nil}}"#
    );
    assert_eq!(lualit::evaluate(&rendered), Ok(value));
}
