//! `string | number` as a closed enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that is either text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Number(f64),
    Text(String),
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Uppercases text and squares numbers.
pub fn process_value(value: &Primitive) -> Primitive {
    match value {
        Primitive::Text(s) => Primitive::Text(s.to_uppercase()),
        Primitive::Number(n) => Primitive::Number(n * n),
    }
}

/// Uppercases text; formats numbers with two decimals.
pub fn describe(value: &Primitive) -> String {
    match value {
        Primitive::Text(s) => s.to_uppercase(),
        Primitive::Number(n) => format!("{n:.2}"),
    }
}
