//! Composition lesson: embedded structs and trait dispatch.

use anyhow::Result;
use groundwork::oop::{Animal, Car, Dog, Rect, Speak, Start, Vehicle};

use crate::style::{print_item, print_labeled, print_section, print_spacer};

pub fn run() -> Result<()> {
    let dog = Dog::new("Bruno", "Bulldog");
    print_section("Dog");
    print_labeled("name", dog.name());
    print_labeled("warm_blooded", dog.mammal.warm_blooded);
    print_labeled("breed", &dog.breed);
    print_item(&dog.speak());
    print_item(&dog.mammal.give_birth());
    print_item(&dog.fetch());
    print_spacer();

    print_section("Speakers");
    let generic = Animal::new("Generic");
    let speakers: [&dyn Speak; 3] = [&generic, &dog.mammal, &dog];
    for speaker in speakers {
        print_item(&speaker.speak());
    }
    print_spacer();

    print_section("Vehicles");
    let kia = Vehicle {
        brand: "Kia".into(),
    };
    let car = Car::new("Toyota", "Vios");
    let starters: [&dyn Start; 2] = [&kia, &car];
    for starter in starters {
        print_item(&starter.start());
    }
    print_spacer();

    let rect = Rect {
        width: 20.0,
        height: 10.0,
    };
    print_section("Rectangle 20x10");
    print_labeled("area", rect.area());
    print_labeled("perimeter", rect.perimeter());

    Ok(())
}
