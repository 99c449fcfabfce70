//! Unary `-` and `not` applied to a literal operand.
//!
//! The operand kind is fixed by the operator: `-` takes a numeral and `not`
//! takes one of the atomic keywords. Anything else, including parenthesised
//! operands such as `-(1)`, is rejected.

use crate::error::Blame;

use super::{BasicExpression, Expression, ExpressionKind, NumeralExpression, Resolved};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnaryOperator {
    Minus,
    Not,
}

impl UnaryOperator {
    /// Bytes of source text taken by the operator token.
    const fn width(self) -> usize {
        match self {
            Self::Minus => 1,
            Self::Not => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryOperatorExpression<'a> {
    raw: &'a str,
}

impl<'a> UnaryOperatorExpression<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { raw: raw.trim() }
    }

    /// `-`, or the word `not` followed by whitespace.
    ///
    /// The keyword must end at a word boundary, so `nottrue` is a name rather
    /// than `not` applied to `true`. Past that check the operand is still
    /// sliced at the operator's fixed width.
    fn operator(&self) -> Option<UnaryOperator> {
        if self.raw.starts_with('-') {
            return Some(UnaryOperator::Minus);
        }
        self.raw
            .strip_prefix("not")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(|_| UnaryOperator::Not)
    }

    /// Operand text at a fixed offset after the operator.
    fn operand(&self, operator: UnaryOperator) -> &'a str {
        self.raw.get(operator.width()..).unwrap_or_default()
    }

    /// Blame the operand, or the whole expression when the operand is empty.
    fn operand_blame<E: Expression<'a>>(&self, operand: &E) -> Blame {
        if operand.raw().is_empty() {
            self.blame()
        } else {
            operand.blame()
        }
    }
}

impl<'a> Expression<'a> for UnaryOperatorExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::UnaryOperator
    }

    fn raw(&self) -> &'a str {
        self.raw
    }

    fn claims_valid(&self) -> bool {
        self.operator().is_some()
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        match self.operator() {
            Some(op @ UnaryOperator::Minus) => {
                let operand = NumeralExpression::new(self.operand(op));
                operand
                    .form()
                    .map(|form| Resolved::negated(form, operand.raw()))
                    .ok_or_else(|| self.operand_blame(&operand))
            }
            Some(op @ UnaryOperator::Not) => {
                let operand = BasicExpression::new(self.operand(op));
                operand
                    .token()
                    .map(Resolved::inverted)
                    .ok_or_else(|| self.operand_blame(&operand))
            }
            None => Err(self.blame()),
        }
    }
}
