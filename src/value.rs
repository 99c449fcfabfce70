//! Values produced by evaluating literal expressions.
//!
//! The grammar is dynamically typed, so evaluation yields a small tagged
//! union. Tables keep their fields as ordered `(key, value)` pairs in source
//! order rather than a map; duplicate keys are preserved as written.

use std::fmt::{self, Write};

/// A decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `nil`.
    Nil,
    /// `true` or `false`.
    Boolean(bool),
    /// Decimal or hexadecimal integer numeral.
    Integer(i64),
    /// Floating-point numeral.
    Float(f64),
    /// Quoted or long-bracket string.
    String(String),
    /// Table constructor fields in source order.
    Table(Vec<(Value, Value)>),
}

impl Value {
    /// Lua type name of the value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::Table(_) => "table",
        }
    }

    /// Fields of a table value, or `None` for any other value.
    #[must_use]
    pub fn as_table(&self) -> Option<&[(Self, Self)]> {
        match self {
            Self::Table(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up `key` in a table value.
    ///
    /// When a constructor assigns the same key twice the later field wins, as
    /// it would when the constructor runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use lualit::{Value, evaluate};
    ///
    /// let table = evaluate("{10, x = 'y', x = 'z'}").unwrap_or(Value::Nil);
    /// assert_eq!(table.get(&Value::Integer(1)), Some(&Value::Integer(10)));
    /// assert_eq!(table.get(&Value::from("x")), Some(&Value::from("z")));
    /// ```
    #[must_use]
    pub fn get(&self, key: &Self) -> Option<&Self> {
        self.as_table()?
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// Renders the value as a literal expression that evaluates back to it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Boolean(b) => write!(f, "{b}"),
            // The decimal magnitude of `i64::MIN` overflows to a float.
            Self::Integer(i64::MIN) => f.write_str("-0x8000000000000000"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write_float(f, *x),
            Self::String(s) => write_string(f, s),
            Self::Table(fields) => {
                f.write_char('{')?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "[{key}] = {value}")?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_infinite() {
        // `1e9999` overflows to infinity when read back.
        let sign = if x.is_sign_negative() { "-" } else { "" };
        return write!(f, "{sign}1e9999");
    }
    // `Debug` keeps a `.0` or exponent on every float.
    write!(f, "{x:?}")
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\{:03}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
