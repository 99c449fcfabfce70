//! Validated parse trees.
//!
//! [`Resolved`] records what validation matched (numeral form, string body,
//! table fields) so evaluation decodes it without re-parsing. It borrows the
//! source text it was resolved from.

use crate::tokenizer::{BasicToken, NumeralForm};
use crate::value::Value;

use super::{basic, numeral, string_literal::StringForm};

/// A valid expression, ready to evaluate.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a>(Node<'a>);

#[derive(Debug, Clone, PartialEq)]
enum Node<'a> {
    Basic(BasicToken),
    Inverted(BasicToken),
    Numeral(NumeralForm, &'a str),
    Negated(NumeralForm, &'a str),
    String(StringForm<'a>),
    /// Key synthesised from a `name = value` field.
    Name(&'a str),
    /// Key synthesised for a positional field.
    Position(i64),
    Table(Vec<(Resolved<'a>, Resolved<'a>)>),
}

impl<'a> Resolved<'a> {
    pub(crate) fn basic(token: BasicToken) -> Self {
        Self(Node::Basic(token))
    }

    pub(crate) fn inverted(token: BasicToken) -> Self {
        Self(Node::Inverted(token))
    }

    pub(crate) fn numeral(form: NumeralForm, text: &'a str) -> Self {
        Self(Node::Numeral(form, text))
    }

    pub(crate) fn negated(form: NumeralForm, text: &'a str) -> Self {
        Self(Node::Negated(form, text))
    }

    pub(crate) fn string(form: StringForm<'a>) -> Self {
        Self(Node::String(form))
    }

    pub(crate) fn name(name: &'a str) -> Self {
        Self(Node::Name(name))
    }

    pub(crate) fn position(index: i64) -> Self {
        Self(Node::Position(index))
    }

    pub(crate) fn table(fields: Vec<(Self, Self)>) -> Self {
        Self(Node::Table(fields))
    }

    /// Decode the value.
    #[must_use]
    pub fn value(&self) -> Value {
        match &self.0 {
            Node::Basic(token) => basic::value(*token),
            Node::Inverted(token) => Value::Boolean(!basic::is_truthy(*token)),
            Node::Numeral(form, text) => numeral::value(*form, text),
            Node::Negated(form, text) => numeral::negate(numeral::value(*form, text)),
            Node::String(form) => Value::String(form.decode()),
            Node::Name(name) => Value::String((*name).to_owned()),
            Node::Position(index) => Value::Integer(*index),
            Node::Table(fields) => Value::Table(
                fields
                    .iter()
                    .map(|(key, value)| (key.value(), value.value()))
                    .collect(),
            ),
        }
    }
}
