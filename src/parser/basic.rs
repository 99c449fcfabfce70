//! The atomic keywords `false`, `true` and `nil`.

use crate::error::Blame;
use crate::tokenizer::{BasicToken, basic_token};
use crate::value::Value;

use super::{Expression, ExpressionKind, Resolved};

/// Matches exactly one of `false`, `true`, `nil` (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicExpression<'a> {
    raw: &'a str,
}

impl<'a> BasicExpression<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { raw: raw.trim() }
    }

    pub(crate) fn token(&self) -> Option<BasicToken> {
        basic_token(self.raw)
    }
}

impl<'a> Expression<'a> for BasicExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::Basic
    }

    fn raw(&self) -> &'a str {
        self.raw
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        self.token().map(Resolved::basic).ok_or_else(|| self.blame())
    }
}

pub(crate) fn value(token: BasicToken) -> Value {
    match token {
        BasicToken::False => Value::Boolean(false),
        BasicToken::True => Value::Boolean(true),
        BasicToken::Nil => Value::Nil,
    }
}

/// `nil` and `false` are the only falsy values.
pub(crate) fn is_truthy(token: BasicToken) -> bool {
    token == BasicToken::True
}
