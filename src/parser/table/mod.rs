//! Table constructors: `{ field-list }`.
//!
//! A text shaped like `{...}` is claimed by this kind before any field is
//! examined; a claimed table that fails inside reports a table-specific
//! blame (or the blame of a more specific nested expression), never a
//! fallback to another kind.

use log::debug;

use crate::error::Blame;

use super::generic::MAX_NESTING;
use super::{Expression, ExpressionKind, Resolved};

mod field_list;

use field_list::{FieldError, parse_field_list};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConstructorExpression<'a> {
    raw: &'a str,
    level: usize,
}

impl<'a> TableConstructorExpression<'a> {
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
        self.raw.strip_prefix('{')?.strip_suffix('}')
    }
}

impl<'a> Expression<'a> for TableConstructorExpression<'a> {
    fn kind(&self) -> ExpressionKind {
        ExpressionKind::TableConstructor
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
            debug!("table constructors nested deeper than {MAX_NESTING} levels");
            return Err(self.blame());
        }
        parse_field_list(interior, self.level + 1)
            .map(Resolved::table)
            .map_err(|err| match err {
                FieldError::Malformed => self.blame(),
                FieldError::Nested(nested) => self.blame_nested(nested),
            })
    }
}
