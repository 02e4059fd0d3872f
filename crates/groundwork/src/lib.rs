//! # Groundwork: typed fundamentals by example
//!
//! Small, reusable building blocks that the Groundwork lessons exercise.
//!
//! ## Learning Path
//!
//! 1. [`value`] - `string | number` as a closed enum
//! 2. [`records`] - partial updates, picked and omitted fields, keyed tables
//! 3. [`guards`] - domain validation that fails at the point of violation
//! 4. [`oop`] - composition and traits instead of class inheritance
//! 5. [`stack`] - a generic LIFO container
//! 6. [`shape`], [`outcome`], [`pet`] - tagged unions and exhaustive dispatch
//!
//! ## Core Contracts
//!
//! - **Absence is not an error**: [`Stack::pop`] on an empty stack is `None`.
//! - **Dispatch is total**: every union is a Rust `enum` matched without a
//!   wildcard arm.
//! - **Probing only at the boundary**: [`pet::classify`] is the single place
//!   that inspects field presence on untyped data.

pub mod error;
pub mod guards;
pub mod oop;
pub mod outcome;
pub mod pet;
pub mod records;
pub mod shape;
pub mod stack;
pub mod value;

pub use error::{GuardError, ProbeError, Result};
pub use outcome::{Outcome, handle_result};
pub use pet::{Pet, classify, make_sound};
pub use shape::{Shape, ShapeKind, get_area};
pub use stack::Stack;
pub use value::Primitive;
