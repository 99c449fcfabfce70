//! Expression kinds for the literal-constant grammar.
//!
//! Every kind wraps trimmed, borrowed source text and implements
//! [`Expression`]. [`GenericExpression`] is the entry point: it selects the
//! first kind that claims a text and delegates to it. Tables, parenthesised
//! expressions and table keys recurse through the dispatcher; unary operands
//! are typed directly as numerals or keywords.

mod basic;
mod generic;
mod kind;
mod numeral;
mod prefix;
mod resolved;
mod string_literal;
mod table;
mod unary;

pub use basic::BasicExpression;
pub use generic::GenericExpression;
pub use kind::{Expression, ExpressionKind};
pub use numeral::NumeralExpression;
pub use prefix::PrefixExpression;
pub use resolved::Resolved;
pub use string_literal::LiteralStringExpression;
pub use table::TableConstructorExpression;
pub use unary::UnaryOperatorExpression;
