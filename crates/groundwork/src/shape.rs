//! # Shapes: discriminated union dispatch
//!
//! `Shape` is a closed set of variants sharing a `kind` discriminant. Each
//! function below matches on every variant without a wildcard arm, so adding a
//! variant fails to compile until every dispatch handles it.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};

/// Discriminant of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// A closed union of plane shapes.
///
/// Serialized with an explicit `kind` tag:
/// `{"kind":"circle","radius":5.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    /// Creates a circle, rejecting negative or non-finite radii.
    pub fn circle(radius: f64) -> Result<Self> {
        Ok(Self::Circle {
            radius: check_dimension("radius", radius)?,
        })
    }

    /// Creates a rectangle, rejecting negative or non-finite sides.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        Ok(Self::Rectangle {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle { radius } => write!(f, "circle with the radius of {radius}"),
            Self::Rectangle { width, height } => write!(
                f,
                "rectangle with the width of {width} and height of {height}"
            ),
        }
    }
}

fn check_dimension(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GuardError::InvalidDimension { field, value })
    }
}

/// Area of a shape: `π·r²` for circles, `w·h` for rectangles.
pub fn get_area(shape: &Shape) -> f64 {
    match *shape {
        Shape::Circle { radius } => PI * radius * radius,
        Shape::Rectangle { width, height } => width * height,
    }
}

/// Perimeter of a shape: `2πr` for circles, `2(w+h)` for rectangles.
pub fn perimeter(shape: &Shape) -> f64 {
    match *shape {
        Shape::Circle { radius } => 2.0 * PI * radius,
        Shape::Rectangle { width, height } => 2.0 * (width + height),
    }
}
