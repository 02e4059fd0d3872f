//! Tagged-union lessons: shapes, outcomes, pets and primitive values.

use anyhow::{Context, Result};
use groundwork::pet::{Cat, Dog};
use groundwork::shape::perimeter;
use groundwork::value::{describe, process_value};
use groundwork::{Outcome, Pet, Primitive, Shape, classify, get_area, handle_result, make_sound};
use tracing::debug;

use crate::style::{print_item, print_labeled, print_section};

pub fn shapes() -> Result<()> {
    let shapes = [Shape::circle(5.0)?, Shape::rectangle(10.0, 10.0)?];

    for shape in &shapes {
        print_section(&format!("area of a {shape} is {:.2}", get_area(shape)));
        print_labeled("kind", shape.kind());
        print_labeled("perimeter", format!("{:.2}", perimeter(shape)));
    }
    Ok(())
}

pub fn results() -> Result<()> {
    let outcomes = [
        Outcome::success("this is your data"),
        Outcome::error("you got an error"),
    ];

    for outcome in &outcomes {
        debug!(status = outcome.status(), "handling outcome");
        println!("{}", handle_result(outcome));
    }
    Ok(())
}

pub fn pets(json: Option<&str>) -> Result<()> {
    let pets = match json {
        Some(raw) => {
            let value: serde_json::Value =
                serde_json::from_str(raw).context("Pet must be valid JSON")?;
            vec![classify(&value).context("Could not classify pet")?]
        }
        None => vec![
            Pet::Dog(Dog {
                breed: "Bulldog".into(),
            }),
            Pet::Cat(Cat {
                color: "yellow".into(),
            }),
        ],
    };

    for pet in &pets {
        let label = match pet {
            Pet::Dog(_) => "Dog",
            Pet::Cat(_) => "Cat",
        };
        print_section(label);
        for line in make_sound(pet) {
            print_item(&line);
        }
    }
    Ok(())
}

pub fn values() -> Result<()> {
    let inputs = [
        Primitive::from("hello"),
        Primitive::from(12.0),
        Primitive::from(2.756_454_35),
    ];

    for input in &inputs {
        print_section(&input.to_string());
        print_labeled("processed", process_value(input));
        print_labeled("described", describe(input));
    }
    Ok(())
}
