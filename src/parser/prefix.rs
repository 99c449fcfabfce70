//! Parenthesised expressions.

use log::debug;

use crate::error::Blame;

use super::generic::MAX_NESTING;
use super::{Expression, ExpressionKind, GenericExpression, Resolved};

/// `( expression )`, evaluating to the enclosed expression's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixExpression<'a> {
    raw: &'a str,
    level: usize,
}

impl<'a> PrefixExpression<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self::nested(raw, 0)
    }

    pub(crate) fn nested(raw: &'a str, level: usize) -> Self {
        Self {
            raw: raw.trim(),
            level,
        }
    }

    fn interior(&self) -> Option<&'a str> {
        self.raw.strip_prefix('(')?.strip_suffix(')')
    }
}

impl<'a> Expression<'a> for PrefixExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::Prefix
    }

    fn raw(&self) -> &'a str {
        self.raw
    }

    fn claims_valid(&self) -> bool {
        self.interior().is_some()
    }

    fn resolve(&self) -> Result<Resolved<'a>, Blame> {
        let interior = self.interior().ok_or_else(|| self.blame())?;
        if self.level >= MAX_NESTING {
            debug!("parentheses nested deeper than {MAX_NESTING} levels");
            return Err(self.blame());
        }
        GenericExpression::nested(interior, self.level + 1)
            .resolve()
            .map_err(|nested| self.blame_nested(nested))
    }
}
