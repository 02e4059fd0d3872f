//! # Domain guards
//!
//! **Learning objective:** validate at the point of violation and let the
//! caller decide what to do.
//!
//! Every guard here returns `Result<_, GuardError>`. A failing guard leaves
//! any state it touches unchanged.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{GuardError, Result};

// ============================================================================
// Arithmetic
// ============================================================================

/// A binary operation that may reject its operands.
pub type MathOperation = fn(f64, f64) -> Result<f64>;

pub fn add(a: f64, b: f64) -> Result<f64> {
    Ok(a + b)
}

pub fn subtract(a: f64, b: f64) -> Result<f64> {
    Ok(a - b)
}

pub fn multiply(a: f64, b: f64) -> Result<f64> {
    Ok(a * b)
}

/// Divides `a` by `b`, rejecting a zero divisor.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(GuardError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

/// Applies `operation` to the operands.
pub fn calculate(operation: MathOperation, a: f64, b: f64) -> Result<f64> {
    operation(a, b)
}

/// Largest of the given numbers.
pub fn find_max(numbers: &[f64]) -> Result<f64> {
    numbers
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(GuardError::EmptyInput)
}

/// Summary statistics over a non-empty slice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberStats {
    pub sum: f64,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

impl NumberStats {
    pub fn from_slice(numbers: &[f64]) -> Result<Self> {
        let max = find_max(numbers)?;
        let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let sum: f64 = numbers.iter().sum();

        Ok(Self {
            sum,
            avg: sum / numbers.len() as f64,
            max,
            min,
        })
    }
}

/// Letter grade for a score.
///
/// Only the `A` band is capped at 100; anything higher falls through to `B`.
pub fn letter_grade(score: f64) -> char {
    match score {
        s if (90.0..=100.0).contains(&s) => 'A',
        s if s >= 80.0 => 'B',
        s if s >= 70.0 => 'C',
        s if s >= 60.0 => 'D',
        _ => 'F',
    }
}

// ============================================================================
// Users
// ============================================================================

/// Minimum age accepted by [`create_user`].
pub const LEGAL_AGE: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Creates a user, rejecting anyone under [`LEGAL_AGE`].
pub fn create_user(id: u32, name: &str, email: &str, age: u32) -> Result<User> {
    create_user_with_minimum(id, name, email, age, LEGAL_AGE)
}

/// Creates a user, rejecting anyone under `minimum`.
pub fn create_user_with_minimum(
    id: u32,
    name: &str,
    email: &str,
    age: u32,
    minimum: u32,
) -> Result<User> {
    if age < minimum {
        warn!(age, minimum, "rejected underage user");
        return Err(GuardError::UnderLegalAge { age, minimum });
    }

    Ok(User {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        age,
    })
}

// ============================================================================
// Bank account
// ============================================================================

/// An account whose balance only changes through checked operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankAccount {
    balance: f64,
}

impl BankAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        check_positive(amount)?;
        self.balance += amount;
        debug!(amount, balance = self.balance, "deposit");
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<()> {
        check_positive(amount)?;
        if amount > self.balance {
            warn!(amount, balance = self.balance, "withdrawal exceeds balance");
            return Err(GuardError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        debug!(amount, balance = self.balance, "withdraw");
        Ok(())
    }
}

fn check_positive(amount: f64) -> Result<()> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(GuardError::NonPositiveAmount(amount));
    }
    Ok(())
}

// ============================================================================
// Student grades
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: u32,
    pub name: String,
    grades: Vec<f64>,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Records a grade in `[0, 100]`.
    pub fn add_grade(&mut self, grade: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&grade) {
            return Err(GuardError::GradeOutOfRange(grade));
        }
        self.grades.push(grade);
        Ok(())
    }

    /// Mean grade, or 0 with no grades.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Highest grade, or 0 with no grades.
    pub fn highest(&self) -> f64 {
        find_max(&self.grades).unwrap_or(0.0)
    }

    /// A copy of the recorded grades.
    pub fn grades(&self) -> Vec<f64> {
        self.grades.clone()
    }
}

// ============================================================================
// Temperature
// ============================================================================

/// Lowest representable temperature in °C.
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// A validated, immutable temperature.
///
/// There are no setters: `with_celsius` / `with_fahrenheit` build a new,
/// re-validated value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Temperature {
    celsius: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Result<Self> {
        if celsius.is_nan() {
            return Err(GuardError::NotANumber {
                field: "temperature",
            });
        }
        if celsius < ABSOLUTE_ZERO_C {
            return Err(GuardError::BelowAbsoluteZero(celsius));
        }
        Ok(Self { celsius })
    }

    pub fn from_fahrenheit(fahrenheit: f64) -> Result<Self> {
        Self::from_celsius((fahrenheit - 32.0) * 5.0 / 9.0)
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f64 {
        self.celsius * 9.0 / 5.0 + 32.0
    }

    pub fn with_celsius(self, celsius: f64) -> Result<Self> {
        Self::from_celsius(celsius)
    }

    pub fn with_fahrenheit(self, fahrenheit: f64) -> Result<Self> {
        Self::from_fahrenheit(fahrenheit)
    }
}
