//! # Composition instead of inheritance
//!
//! A three-level class chain (`Animal → Mammal → Dog`) becomes plain structs
//! that embed their "parent" by value, plus a [`Speak`] trait for the one
//! behaviour that is polymorphic. Nothing is promoted implicitly: a `Dog`
//! reaches its name through [`Dog::name`], which walks the embedded values.

/// Polymorphic speech.
pub trait Speak {
    fn speak(&self) -> String;
}

/// Polymorphic start-up message.
pub trait Start {
    fn start(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
}

impl Animal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speak for Animal {
    fn speak(&self) -> String {
        format!("{} makes a sound", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mammal {
    pub animal: Animal,
    pub warm_blooded: bool,
}

impl Mammal {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            animal: Animal::new(name),
            warm_blooded: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.animal.name
    }

    pub fn give_birth(&self) -> String {
        format!("{} gives birth to live young", self.name())
    }
}

impl Speak for Mammal {
    fn speak(&self) -> String {
        self.animal.speak()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    pub mammal: Mammal,
    pub breed: String,
}

impl Dog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            mammal: Mammal::new(name),
            breed: breed.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.mammal.name()
    }

    pub fn fetch(&self) -> String {
        format!("{} fetches ball", self.name())
    }
}

impl Speak for Dog {
    fn speak(&self) -> String {
        format!("{} barks", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub brand: String,
}

impl Start for Vehicle {
    fn start(&self) -> String {
        format!("{} vehicle started", self.brand)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub vehicle: Vehicle,
    pub model: String,
}

impl Car {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle {
                brand: brand.into(),
            },
            model: model.into(),
        }
    }
}

impl Start for Car {
    fn start(&self) -> String {
        format!("{} {} car started", self.vehicle.brand, self.model)
    }
}

/// An axis-aligned rectangle with plain methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn perimeter(&self) -> f64 {
        (self.width + self.height) * 2.0
    }
}
