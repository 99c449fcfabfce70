//! The dispatcher that picks an expression kind for a text.
//!
//! Kinds are tried in a fixed order. The first kind whose shape check claims
//! the text is selected for good: its validity decides the outcome and its
//! blame is reported, even if a later kind would have accepted the text.
//!
//! Tables and parenthesised expressions recurse through the dispatcher. Each
//! recursion is one nesting level deeper, and a construct at
//! [`MAX_NESTING`] levels is rejected instead of descending further.

use log::{debug, trace};

use crate::error::Blame;

use super::{
    BasicExpression, Expression, ExpressionKind, LiteralStringExpression, NumeralExpression,
    PrefixExpression, Resolved, TableConstructorExpression, UnaryOperatorExpression,
};

/// An expression of whichever kind claimed the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claimed<'a> {
    Basic(BasicExpression<'a>),
    Numeral(NumeralExpression<'a>),
    String(LiteralStringExpression<'a>),
    Table(TableConstructorExpression<'a>),
    Prefix(PrefixExpression<'a>),
    Unary(UnaryOperatorExpression<'a>),
}

/// Forward a method call to the expression held by a [`Claimed`].
macro_rules! delegate {
    ( $claimed:expr, $expr:ident => $call:expr ) => {
        match $claimed {
            Claimed::Basic($expr) => $call,
            Claimed::Numeral($expr) => $call,
            Claimed::String($expr) => $call,
            Claimed::Table($expr) => $call,
            Claimed::Prefix($expr) => $call,
            Claimed::Unary($expr) => $call,
        }
    };
}

fn basic(raw: &str, _level: usize) -> Claimed<'_> {
    Claimed::Basic(BasicExpression::new(raw))
}

fn numeral(raw: &str, _level: usize) -> Claimed<'_> {
    Claimed::Numeral(NumeralExpression::new(raw))
}

fn string(raw: &str, _level: usize) -> Claimed<'_> {
    Claimed::String(LiteralStringExpression::new(raw))
}

fn table(raw: &str, level: usize) -> Claimed<'_> {
    Claimed::Table(TableConstructorExpression::nested(raw, level))
}

fn prefix(raw: &str, level: usize) -> Claimed<'_> {
    Claimed::Prefix(PrefixExpression::nested(raw, level))
}

fn unary(raw: &str, _level: usize) -> Claimed<'_> {
    Claimed::Unary(UnaryOperatorExpression::new(raw))
}

impl<'a> Expression<'a> for Claimed<'a> {
    fn kind(&self) -> ExpressionKind {
        delegate!(self, expr => expr.kind())
    }

    fn raw(&self) -> &'a str {
        delegate!(self, expr => expr.raw())
    }

    fn claims_valid(&self) -> bool {
        delegate!(self, expr => expr.claims_valid())
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        delegate!(self, expr => expr.resolve())
    }
}

/// Deepest nesting of tables and parentheses that is resolved.
pub(crate) const MAX_NESTING: usize = 200;

type Constructor = for<'r> fn(&'r str, usize) -> Claimed<'r>;

/// Candidate kinds in priority order.
const KNOWN_KINDS: [Constructor; 6] = [basic, numeral, string, table, prefix, unary];

/// Resolves a text to the first expression kind that claims it.
///
/// # Examples
///
/// ```
/// use lualit::parser::{Expression, ExpressionKind, GenericExpression};
///
/// let expr = GenericExpression::new("{1 1}");
/// assert_eq!(expr.selected_kind(), Some(ExpressionKind::TableConstructor));
/// assert_eq!(
///     expr.invalid_reason().as_deref(),
///     Some("Invalid TableConstructorExpression: {1 1}")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericExpression<'a> {
    raw: &'a str,
    level: usize,
}

impl<'a> GenericExpression<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self::nested(raw, 0)
    }

    /// Dispatcher for text nested `level` tables or parentheses deep.
    pub(crate) fn nested(raw: &'a str, level: usize) -> Self {
        Self {
            raw: raw.trim(),
            level,
        }
    }

    fn claim(&self) -> Option<Claimed<'a>> {
        let claimed = KNOWN_KINDS
            .iter()
            .map(|construct| construct(self.raw, self.level))
            .find(|candidate| candidate.claims_valid());
        match &claimed {
            Some(candidate) => debug!("{} claims {:?}", candidate.kind(), self.raw),
            None => trace!("no expression kind claims {:?}", self.raw),
        }
        claimed
    }

    /// Kind selected for the text, or `None` when no kind claims it.
    #[must_use]
    pub fn selected_kind(&self) -> Option<ExpressionKind> {
        self.claim().map(|claimed| claimed.kind())
    }
}

impl<'a> Expression<'a> for GenericExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::Generic
    }

    fn raw(&self) -> &'a str {
        self.raw
    }

    fn claims_valid(&self) -> bool {
        self.claim().is_some()
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        self.claim().ok_or_else(|| self.blame())?.resolve()
    }
}
