//! Field-list parsing for table constructors.
//!
//! The interior of the braces is split on `,` and `;` at nesting depth zero.
//! The splitter steps over quoted and long-bracket strings and tracks `{}`,
//! `[]` and `()` depth, so a separator inside a nested table, key or string
//! never ends a field. Each segment is then parsed as one field:
//!
//! - `[key] = value`, where the key ends at the `]` balancing the opening
//!   `[`;
//! - `name = value`, keyed by the string `name`;
//! - `value`, keyed by the next positional index (starting at 1 and counting
//!   positional fields only).
//!
//! Only the segment after the final separator may be empty, which allows a
//! single trailing separator.

use log::{debug, warn};

use crate::error::Blame;
use crate::parser::string_literal::{long_bracket_level, scan_long_bracket, scan_quoted};
use crate::parser::{Expression, GenericExpression, Resolved};

/// Why a field list was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum FieldError {
    /// The list itself is malformed; the table is to blame.
    Malformed,
    /// A key or value sub-expression failed.
    Nested(Blame),
}

type Field<'a> = (Resolved<'a>, Resolved<'a>);

/// Parse the fields of a table whose keys and values sit at nesting `level`.
pub(super) fn parse_field_list(
    interior: &str,
    level: usize,
) -> Result<Vec<Field<'_>>, FieldError> {
    let segments = split_fields(interior);
    let mut positional = 0;
    let mut fields = Vec::with_capacity(segments.len());
    for (idx, &segment) in segments.iter().enumerate() {
        let text = segment.trim();
        if text.is_empty() {
            if idx + 1 == segments.len() {
                continue;
            }
            debug!("empty field {idx} in table field list {interior:?}");
            return Err(FieldError::Malformed);
        }
        let field = parse_field(text, level, &mut positional).inspect_err(|err| {
            debug!("rejected table field {text:?}: {err:?}");
        })?;
        fields.push(field);
    }
    Ok(fields)
}

/// Lexical unit seen by the splitter and the key matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Open,
    Close(char),
    Separator,
    /// A string, or any other character.
    Opaque,
}

/// The token opening `rest` and its width in bytes. Unterminated strings
/// swallow the rest of the text.
fn next_token(rest: &str) -> Option<(Token, usize)> {
    let ch = rest.chars().next()?;
    let width = match ch {
        '"' | '\'' => scan_quoted(rest).map_or(rest.len(), |quoted| quoted.end),
        '[' if long_bracket_level(rest).is_some() => {
            scan_long_bracket(rest).map_or(rest.len(), |long| long.end)
        }
        '[' | '{' | '(' => return Some((Token::Open, 1)),
        ']' | '}' | ')' => return Some((Token::Close(ch), 1)),
        ',' | ';' => return Some((Token::Separator, 1)),
        _ => ch.len_utf8(),
    };
    Some((Token::Opaque, width))
}

/// Split on top-level separators.
fn split_fields(interior: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0_usize;
    let mut start = 0;
    let mut idx = 0;
    while let Some((token, width)) = interior.get(idx..).and_then(next_token) {
        match token {
            Token::Open => depth += 1,
            Token::Close(ch) => {
                if depth == 0 {
                    warn!("unbalanced {ch:?} in table field list {interior:?}");
                }
                depth = depth.saturating_sub(1);
            }
            Token::Separator if depth == 0 => {
                segments.push(interior.get(start..idx).unwrap_or_default());
                start = idx + width;
            }
            Token::Separator | Token::Opaque => {}
        }
        idx += width;
    }
    segments.push(interior.get(start..).unwrap_or_default());
    segments
}

/// Offset of the `]` balancing the `[` that opens `text`.
///
/// Returns `None` when the bracket is never closed or is closed by another
/// kind of delimiter.
fn matching_bracket(text: &str) -> Option<usize> {
    let mut depth = 0_usize;
    let mut idx = 0;
    while let Some((token, width)) = text.get(idx..).and_then(next_token) {
        match token {
            Token::Open => depth += 1,
            Token::Close(ch) => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return (ch == ']').then_some(idx);
                }
            }
            Token::Separator | Token::Opaque => {}
        }
        idx += width;
    }
    None
}

fn parse_field<'a>(
    text: &'a str,
    level: usize,
    positional: &mut i64,
) -> Result<Field<'a>, FieldError> {
    if text.starts_with('[') && long_bracket_level(text).is_none() {
        return parse_bracketed(text, level);
    }
    if let Some((name, value)) = split_named(text) {
        return Ok((Resolved::name(name), resolve_nested(value, level)?));
    }
    *positional += 1;
    Ok((Resolved::position(*positional), resolve_nested(text, level)?))
}

/// `[key] = value`. The key is resolved once, up to its balancing `]`.
fn parse_bracketed(text: &str, level: usize) -> Result<Field<'_>, FieldError> {
    let close = matching_bracket(text).ok_or(FieldError::Malformed)?;
    let key_text = text.get(1..close).ok_or(FieldError::Malformed)?;
    let key = resolve_nested(key_text, level)?;
    let rest = text.get(close + 1..).unwrap_or_default().trim_start();
    let value = rest.strip_prefix('=').ok_or(FieldError::Malformed)?;
    Ok((key, resolve_nested(value, level)?))
}

/// `name = value`, returning the identifier and the value text.
fn split_named(text: &str) -> Option<(&str, &str)> {
    let name_len = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    let name = text.get(..name_len)?;
    if !name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        return None;
    }
    let value = text.get(name_len..)?.trim_start().strip_prefix('=')?;
    Some((name, value))
}

fn resolve_nested(text: &str, level: usize) -> Result<Resolved<'_>, FieldError> {
    GenericExpression::nested(text, level)
        .resolve()
        .map_err(FieldError::Nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ExpressionKind;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![""])]
    #[case("1,2;3", vec!["1", "2", "3"])]
    #[case("1,", vec!["1", ""])]
    #[case("{1,2}, 3", vec!["{1,2}", " 3"])]
    #[case("[ 'a,b' ] = 1; x", vec!["[ 'a,b' ] = 1", " x"])]
    #[case("[[a;b]], (1)", vec!["[[a;b]]", " (1)"])]
    #[case("[=[x]]y]=], 2", vec!["[=[x]]y]=]", " 2"])]
    #[case("'unterminated, 1", vec!["'unterminated, 1"])]
    #[case("{, 1", vec!["{, 1"])]
    #[case("}, 1", vec!["}", " 1"])]
    fn splits_on_top_level_separators(#[case] interior: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_fields(interior), expected);
    }

    #[rstest]
    #[case("[1] = 2", Some(2))]
    #[case("[{[1] = 2}] = 3", Some(10))]
    #[case("[ ']' ] = 1", Some(6))]
    #[case("[ [[]] ] = 1", Some(7))]
    #[case("[(]) = 1", None)]
    #[case("[1", None)]
    fn finds_balancing_bracket(#[case] text: &str, #[case] expected: Option<usize>) {
        assert_eq!(matching_bracket(text), expected);
    }

    #[rstest]
    #[case("foo = 1", Some(("foo", " 1")))]
    #[case("_x1=2", Some(("_x1", "2")))]
    #[case("1x = 2", None)]
    #[case("foo", None)]
    #[case("foo bar = 1", None)]
    fn recognises_named_fields(#[case] text: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_named(text), expected);
    }

    #[test]
    fn positional_counter_skips_keyed_fields() {
        let mut positional = 0;
        assert!(parse_field("x = 1", 1, &mut positional).is_ok());
        assert!(parse_field("[5] = 1", 1, &mut positional).is_ok());
        assert!(parse_field("'a'", 1, &mut positional).is_ok());
        assert_eq!(positional, 1);
    }

    #[test]
    fn bracketed_key_without_assignment_is_malformed() {
        assert_eq!(parse_bracketed("[1] 2", 1).err(), Some(FieldError::Malformed));
    }

    #[test]
    fn invalid_key_is_blamed_without_trying_later_brackets() {
        let err = parse_bracketed("[not 2] = 1]", 1).err();
        assert_eq!(
            err,
            Some(FieldError::Nested(Blame::new(ExpressionKind::Basic, "2")))
        );
    }
}
