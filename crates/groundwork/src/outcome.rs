//! Success-or-error tagged union and its handler.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of an operation, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success { data: String },
    Error { message: String },
}

impl Outcome {
    pub fn success(data: impl Into<String>) -> Self {
        Self::Success { data: data.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The discriminant literal: `"success"` or `"error"`.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}

impl<E: fmt::Display> From<std::result::Result<String, E>> for Outcome {
    fn from(result: std::result::Result<String, E>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Renders an outcome for display.
pub fn handle_result(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success { data } => format!("Success! {data}"),
        Outcome::Error { message } => format!("Error! {message}"),
    }
}
