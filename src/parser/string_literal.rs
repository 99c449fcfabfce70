//! Quoted and long-bracket string literals.
//!
//! Quoted strings (`'...'`, `"..."`) decode escape sequences. Long-bracket
//! strings (`[[...]]`, `[==[...]==]`) are taken verbatim apart from dropping
//! a newline that directly follows the opening bracket. Both forms may span
//! several lines and must cover the whole trimmed text.
//!
//! The scanners here are also used by the table field splitter to step over
//! string bodies, so separators and brackets inside strings are not mistaken
//! for table syntax.

use std::iter::Peekable;
use std::ops::Range;
use std::str::Chars;

use crate::error::Blame;

use super::{Expression, ExpressionKind, Resolved};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralStringExpression<'a> {
    raw: &'a str,
}

impl<'a> LiteralStringExpression<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { raw: raw.trim() }
    }

    pub(crate) fn form(&self) -> Option<StringForm<'a>> {
        let raw = self.raw;
        if let Some(quoted) = scan_quoted(raw) {
            return whole(raw, quoted).map(StringForm::Quoted);
        }
        scan_long_bracket(raw)
            .and_then(|long| whole(raw, long))
            .map(StringForm::Long)
    }
}

/// Body of `delimited` if the string spans all of `raw`.
fn whole(raw: &str, delimited: Delimited) -> Option<&str> {
    if delimited.end == raw.len() {
        raw.get(delimited.body)
    } else {
        None
    }
}

impl<'a> Expression<'a> for LiteralStringExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::LiteralString
    }

    fn raw(&self) -> &'a str {
        self.raw
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        self.form().map(Resolved::string).ok_or_else(|| self.blame())
    }
}

/// Matched surface syntax and the body between the delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringForm<'a> {
    Quoted(&'a str),
    Long(&'a str),
}

impl StringForm<'_> {
    pub(crate) fn decode(self) -> String {
        match self {
            Self::Quoted(body) => unescape(body),
            Self::Long(body) => body.strip_prefix('\n').unwrap_or(body).to_owned(),
        }
    }
}

/// Byte offsets of a delimited string at the start of some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Delimited {
    /// Body between the delimiters.
    pub(crate) body: Range<usize>,
    /// Offset just past the closing delimiter.
    pub(crate) end: usize,
}

/// Scan a quoted string opening `text`, up to the first closing quote of the
/// same kind that is not escaped by a backslash.
///
/// Returns `None` when `text` does not open with a quote or the string is
/// unterminated.
pub(crate) fn scan_quoted(text: &str) -> Option<Delimited> {
    let mut chars = text.char_indices();
    let (_, quote) = chars.next().filter(|&(_, c)| matches!(c, '"' | '\''))?;
    while let Some((idx, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
        } else if ch == quote {
            return Some(Delimited {
                body: 1..idx,
                end: idx + 1,
            });
        }
    }
    None
}

/// Number of `=` in a long-bracket opener (`[`, `=`*, `[`) at the start of
/// `text`.
pub(crate) fn long_bracket_level(text: &str) -> Option<usize> {
    let rest = text.strip_prefix('[')?;
    let after_equals = rest.trim_start_matches('=');
    let level = rest.len() - after_equals.len();
    after_equals.starts_with('[').then_some(level)
}

/// Scan a long-bracket string opening `text`, up to the first closing bracket
/// of the same level that is not directly preceded by a backslash.
///
/// Returns `None` when `text` does not open a long bracket or the string is
/// unterminated.
pub(crate) fn scan_long_bracket(text: &str) -> Option<Delimited> {
    let level = long_bracket_level(text)?;
    let open_len = level + 2;
    let closer = format!("]{}]", "=".repeat(level));
    let body = text.get(open_len..)?;
    let mut from = 0;
    let close = loop {
        let idx = from + body.get(from..)?.find(closer.as_str())?;
        let escaped = body.get(..idx).is_some_and(|before| before.ends_with('\\'));
        if !escaped {
            break idx;
        }
        // `]` is one byte, so the next offset is a char boundary.
        from = idx + 1;
    };
    Some(Delimited {
        body: open_len..open_len + close,
        end: open_len + close + closer.len(),
    })
}

/// Decode the escape sequences of a quoted string body.
///
/// `\ddd` (one to three decimal digits) and `\xhh` (exactly two hex digits)
/// name a code point by value; `\n \r \t \v \\ \" \'` map to the usual
/// characters. Any other backslash is kept as written.
fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some(d) if d.is_ascii_digit() => out.push(decimal_escape(&mut chars)),
            Some('x') => {
                chars.next();
                match hex_escape(&mut chars) {
                    Some(c) => out.push(c),
                    None => out.push_str("\\x"),
                }
            }
            Some(c) => match single_escape(c) {
                Some(mapped) => {
                    chars.next();
                    out.push(mapped);
                }
                None => out.push('\\'),
            },
            None => out.push('\\'),
        }
    }
    out
}

fn single_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

fn decimal_escape(chars: &mut Peekable<Chars<'_>>) -> char {
    let mut code = 0;
    for _ in 0..3 {
        let Some(digit) = chars
            .next_if(char::is_ascii_digit)
            .and_then(|c| c.to_digit(10))
        else {
            break;
        };
        code = code * 10 + digit;
    }
    // At most 999, which is always a scalar value.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn hex_escape(chars: &mut Peekable<Chars<'_>>) -> Option<char> {
    let mut ahead = chars.clone();
    let hi = ahead.next()?.to_digit(16)?;
    let lo = ahead.next()?.to_digit(16)?;
    *chars = ahead;
    char::from_u32(hi * 16 + lo)
}
