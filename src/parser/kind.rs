//! The capability set shared by every expression kind.
//!
//! Each kind answers three questions about its trimmed source text: whether
//! it *claims* the text (a cheap shape check), whether the text is fully
//! valid, and what value it evaluates to. Validity and evaluation both run
//! through [`Expression::resolve`], so a text that is valid always evaluates
//! and an invalid one always fails with a [`Blame`].

use std::fmt;

use crate::error::{Blame, EvaluationError};
use crate::value::Value;

use super::Resolved;

/// Names of the expression kinds, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Basic,
    Numeral,
    LiteralString,
    TableConstructor,
    Prefix,
    UnaryOperator,
    /// The dispatcher. Blamed only when no other kind claims the text.
    Generic,
}

impl ExpressionKind {
    /// Name rendered in `Invalid <Kind>: <raw>` messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "BasicExpression",
            Self::Numeral => "NumeralExpression",
            Self::LiteralString => "LiteralStringExpression",
            Self::TableConstructor => "TableConstructorExpression",
            Self::Prefix => "PrefixExpression",
            Self::UnaryOperator => "UnaryOperatorExpression",
            Self::Generic => "GenericExpression",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal expression over borrowed, trimmed source text.
pub trait Expression<'a> {
    /// Kind reported when this expression is blamed.
    fn kind(&self) -> ExpressionKind;

    /// Source text with surrounding whitespace removed.
    fn raw(&self) -> &'a str;

    /// Validate the text, producing the parse that evaluation consumes.
    ///
    /// # Errors
    /// Returns the [`Blame`] of the most specific rejected sub-expression.
    fn resolve(&self) -> Result<Resolved<'a>, Blame>;

    /// Whether the text has the outward shape of this kind.
    ///
    /// Kinds without a cheaper shape check claim exactly what they accept.
    fn claims_valid(&self) -> bool {
        self.is_valid()
    }

    /// Whether the text is a valid expression of this kind.
    fn is_valid(&self) -> bool {
        self.resolve().is_ok()
    }

    /// Decode the value of the expression.
    fn evaluate(&self) -> Result<Value, EvaluationError> {
        Ok(self.resolve()?.value())
    }

    /// The `Invalid <Kind>: <raw>` message for an invalid expression, naming
    /// the blamed sub-expression rather than necessarily `self`.
    fn invalid_reason(&self) -> Option<String> {
        self.resolve().err().map(|blame| blame.to_string())
    }

    /// Blame this expression itself.
    fn blame(&self) -> Blame {
        Blame::new(self.kind(), self.raw())
    }

    /// Keep a nested failure, unless nothing claimed the nested text; then
    /// this expression is the most specific one that recognised anything.
    fn blame_nested(&self, nested: Blame) -> Blame {
        if nested.kind() == ExpressionKind::Generic {
            self.blame()
        } else {
            nested
        }
    }
}
