//! Diagnostics produced when a literal expression fails to evaluate.
//!
//! Validity checks never fail; they answer with a `bool`. Evaluation is the
//! only fallible operation and reports the most specific sub-expression that
//! was rejected as a [`Blame`].

use thiserror::Error;

use crate::parser::ExpressionKind;

/// Names the expression responsible for a failed parse.
///
/// The rendered form is `Invalid <Kind>: <raw>`, where `raw` is the trimmed
/// source text of the rejected expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind}: {raw}")]
pub struct Blame {
    kind: ExpressionKind,
    raw: String,
}

impl Blame {
    /// Build a descriptor for an expression of `kind` spanning `raw`.
    #[must_use]
    pub fn new(kind: ExpressionKind, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_owned(),
        }
    }

    /// Kind of the rejected expression.
    #[must_use]
    pub fn kind(&self) -> ExpressionKind {
        self.kind
    }

    /// Trimmed source text of the rejected expression.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Error returned by [`crate::evaluate`] and [`crate::parser::Expression::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The text, or one of its sub-expressions, is not a valid literal.
    #[error(transparent)]
    InvalidExpression(#[from] Blame),
}

impl EvaluationError {
    /// The sub-expression blamed for the failure.
    #[must_use]
    pub fn blame(&self) -> &Blame {
        match self {
            Self::InvalidExpression(blame) => blame,
        }
    }
}
