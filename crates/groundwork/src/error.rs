//! Error types for the core lessons.
//!
//! Two families exist: [`GuardError`] for domain validation that fails at the
//! point of violation, and [`ProbeError`] for untyped input that cannot be
//! classified into a closed variant.

use thiserror::Error;

/// Domain validation failures.
///
/// Raised immediately where the violation happens and propagated to the
/// caller. No guard recovers internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuardError {
    #[error("cannot divide {dividend} by zero")]
    DivisionByZero { dividend: f64 },

    #[error("user must be at legal age: {age} is under {minimum}")]
    UnderLegalAge { age: u32, minimum: u32 },

    #[error("at least one number is required")]
    EmptyInput,

    #[error("grade must be between 0 and 100, got {0}")]
    GradeOutOfRange(f64),

    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },

    #[error("temperature cannot be below absolute zero: {0}°C")]
    BelowAbsoluteZero(f64),

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be a non-negative finite number, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },
}

/// Failures classifying untyped data into a closed variant set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),

    #[error("value exposes both `bark` and `meow`; cannot pick a variant")]
    Ambiguous,

    #[error("value exposes neither `bark` nor `meow`")]
    UnknownVariant,

    #[error("{variant} is missing string field `{field}`")]
    MissingField {
        variant: &'static str,
        field: &'static str,
    },
}

/// Result type for guarded operations.
pub type Result<T> = std::result::Result<T, GuardError>;
