//! Generic helpers and record reshaping.
//!
//! Partial updates, picked and omitted fields, and keyed tables are expressed
//! with ordinary structs and `From` conversions.

use std::collections::BTreeMap;

use serde::Serialize;

/// First element of a slice, if any.
pub fn get_first<T>(values: &[T]) -> Option<&T> {
    values.first()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Fields to overwrite on a [`Profile`]; `None` keeps the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// Returns `profile` with every field present in `update` replaced.
pub fn update_profile(profile: Profile, update: ProfileUpdate) -> Profile {
    Profile {
        name: update.name.unwrap_or(profile.name),
        email: update.email.unwrap_or(profile.email),
        age: update.age.unwrap_or(profile.age),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// Name and price of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: f64,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An [`Account`] without its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeAccount {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl From<Account> for SafeAccount {
    fn from(account: Account) -> Self {
        let Account {
            id,
            name,
            email,
            password: _,
        } = account;
        Self { id, name, email }
    }
}

/// Mean of all scores, or `None` for an empty table.
pub fn average_score(scores: &BTreeMap<String, f64>) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.values().sum::<f64>() / scores.len() as f64)
}

/// Review status with a total style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Declined,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Approved, Status::Declined];

    pub fn style(self) -> StatusStyle {
        match self {
            Self::Pending => StatusStyle {
                color: "yellow",
                icon: "⏳",
            },
            Self::Approved => StatusStyle {
                color: "green",
                icon: "✅",
            },
            Self::Declined => StatusStyle {
                color: "red",
                icon: "❌",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

/// Sum of the squares of the even numbers.
pub fn sum_of_even_squares(numbers: &[i64]) -> i64 {
    numbers
        .iter()
        .filter(|n| *n % 2 == 0)
        .map(|n| n * n)
        .sum()
}
