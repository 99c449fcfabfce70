//! Lexical recognition of numerals and atomic keywords.
//!
//! Numerals are matched with a `logos` automaton. A text is a numeral of a
//! given form only when the lexer yields exactly one token covering all of
//! it, so `11.45.2` and `0xA.1p2` are rejected rather than split. Keywords are
//! looked up in a static `phf` map.

use logos::Logos;
use phf::phf_map;

/// Surface form of a numeral.
///
/// The three forms accept disjoint sets of strings: integers never contain
/// `.`, `e` or `x`, and floats always carry a decimal point or an exponent.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralForm {
    /// One or more decimal digits.
    #[regex(r"[0-9]+")]
    Int,
    /// `0x`/`0X` followed by hex digits. Fractional hex numerals are not part
    /// of the grammar.
    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexInt,
    /// Digits with a decimal point and optional exponent, or digits with a
    /// mandatory exponent.
    #[regex(r"[0-9]*\.[0-9]+([eE]-?[0-9]+)?")]
    #[regex(r"[0-9]+[eE]-?[0-9]+")]
    Float,
}

/// The atomic keyword literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicToken {
    False,
    True,
    Nil,
}

static BASIC_TOKENS: phf::Map<&'static str, BasicToken> = phf_map! {
    "false" => BasicToken::False,
    "true" => BasicToken::True,
    "nil" => BasicToken::Nil,
};

/// Classify `text` as one numeral form, or `None` when it is not exactly one
/// numeral.
///
/// # Examples
///
/// ```
/// use lualit::tokenizer::{NumeralForm, classify_numeral};
///
/// assert_eq!(classify_numeral("0xff"), Some(NumeralForm::HexInt));
/// assert_eq!(classify_numeral("34e1"), Some(NumeralForm::Float));
/// assert_eq!(classify_numeral("3."), None);
/// ```
#[must_use]
pub fn classify_numeral(text: &str) -> Option<NumeralForm> {
    let mut lexer = NumeralForm::lexer(text);
    let form = lexer.next()?.ok()?;
    let spans_all = lexer.span() == (0..text.len());
    (spans_all && lexer.next().is_none()).then_some(form)
}

/// Look up an atomic keyword. Matching is whole-string and case-sensitive.
#[must_use]
pub fn basic_token(text: &str) -> Option<BasicToken> {
    BASIC_TOKENS.get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", Some(NumeralForm::Int))]
    #[case("007", Some(NumeralForm::Int))]
    #[case("0xBEBADA", Some(NumeralForm::HexInt))]
    #[case("0XfF", Some(NumeralForm::HexInt))]
    #[case(".1", Some(NumeralForm::Float))]
    #[case("314.16e-2", Some(NumeralForm::Float))]
    #[case("0.31416E1", Some(NumeralForm::Float))]
    #[case("34e1", Some(NumeralForm::Float))]
    #[case("", None)]
    #[case("3_", None)]
    #[case("3.", None)]
    #[case("1e", None)]
    #[case("1e+5", None)]
    #[case("0x", None)]
    #[case("11.45.2", None)]
    #[case("0xA.1p2", None)]
    #[case(" 1", None)]
    fn classifies_whole_numerals(#[case] text: &str, #[case] expected: Option<NumeralForm>) {
        assert_eq!(classify_numeral(text), expected);
    }

    #[rstest]
    #[case("nil", Some(BasicToken::Nil))]
    #[case("true", Some(BasicToken::True))]
    #[case("False", None)]
    #[case("nil ", None)]
    fn looks_up_keywords(#[case] text: &str, #[case] expected: Option<BasicToken>) {
        assert_eq!(basic_token(text), expected);
    }
}
