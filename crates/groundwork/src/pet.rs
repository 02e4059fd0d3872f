//! # Pets: type guards and capability probing
//!
//! Inside the crate a pet is a closed enum, so [`make_sound`] is checked for
//! exhaustiveness by the compiler and never needs to probe fields.
//!
//! Untyped data (JSON from outside) has no discriminant. [`classify`] is the
//! boundary adapter for that case: it asks "does this value have a `bark`
//! field?" before reading any payload, and produces a typed [`Pet`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ProbeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub breed: String,
}

impl Dog {
    pub fn bark(&self) -> &'static str {
        "woof"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    pub color: String,
}

impl Cat {
    pub fn meow(&self) -> &'static str {
        "meow"
    }
}

/// Closed set of pets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pet {
    Dog(Dog),
    Cat(Cat),
}

/// Type guard: true for the `Dog` variant.
pub fn is_dog(pet: &Pet) -> bool {
    matches!(pet, Pet::Dog(_))
}

/// Type guard: true for the `Cat` variant.
pub fn is_cat(pet: &Pet) -> bool {
    matches!(pet, Pet::Cat(_))
}

/// Returns the lines a pet produces: its sound, then its identifying trait.
pub fn make_sound(pet: &Pet) -> Vec<String> {
    match pet {
        Pet::Dog(dog) => vec![dog.bark().to_string(), format!("breed: {}", dog.breed)],
        Pet::Cat(cat) => vec![cat.meow().to_string(), format!("color: {}", cat.color)],
    }
}

/// Classifies an untyped value by field presence.
///
/// Presence of `bark` selects `Dog` and presence of `meow` selects `Cat`; the
/// probe's value is never inspected. The payload field (`breed` / `color`) is
/// read only after the variant is decided.
pub fn classify(value: &Value) -> Result<Pet, ProbeError> {
    let object = value
        .as_object()
        .ok_or_else(|| ProbeError::NotAnObject(json_type_name(value)))?;

    let barks = object.contains_key("bark");
    let meows = object.contains_key("meow");

    let pet = match (barks, meows) {
        (true, true) => return Err(ProbeError::Ambiguous),
        (false, false) => return Err(ProbeError::UnknownVariant),
        (true, false) => Pet::Dog(Dog {
            breed: string_field(object, "Dog", "breed")?,
        }),
        (false, true) => Pet::Cat(Cat {
            color: string_field(object, "Cat", "color")?,
        }),
    };

    debug!(dog = is_dog(&pet), "classified untyped pet");
    Ok(pet)
}

fn string_field(
    object: &serde_json::Map<String, Value>,
    variant: &'static str,
    field: &'static str,
) -> Result<String, ProbeError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ProbeError::MissingField { variant, field })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
