//! Record lesson: generic access, partial updates, picked and omitted fields.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use groundwork::records::{
    Account, Product, ProductSummary, Profile, ProfileUpdate, SafeAccount, Status, average_score,
    get_first, sum_of_even_squares, update_profile,
};

use crate::style::{print_labeled, print_section, print_spacer, print_table};

pub fn run() -> Result<()> {
    print_section("First element");
    print_labeled("of 1..=6", format!("{:?}", get_first(&[1, 2, 3, 4, 5, 6])));
    print_labeled("of fruits", format!("{:?}", get_first(&["apple", "orange", "mango"])));
    print_labeled("of nothing", format!("{:?}", get_first::<&str>(&[])));
    print_spacer();

    print_section("Partial update");
    let bob = Profile {
        name: "Bob".into(),
        email: "bob@domain.com".into(),
        age: 27,
    };
    print_labeled("before", to_json(&bob)?);
    let updated = update_profile(
        bob,
        ProfileUpdate {
            email: Some("bob@gmail.com".into()),
            ..ProfileUpdate::default()
        },
    );
    print_labeled("updated", to_json(&updated)?);
    print_spacer();

    print_section("Picked and omitted fields");
    let chair = Product {
        id: 123,
        name: "chair".into(),
        description: "this is a good chair".into(),
        price: 12.99,
        category: "appliances".into(),
    };
    print_labeled("summary", to_json(&ProductSummary::from(&chair))?);
    let safe = SafeAccount::from(Account {
        id: 123,
        name: "Bob".into(),
        email: "bob@mail.com".into(),
        password: "bobpassword".into(),
    });
    print_labeled("safe account", to_json(&safe)?);
    print_spacer();

    print_section("Keyed tables");
    let scores: BTreeMap<String, f64> = [("Alice", 98.0), ("Bob", 97.0), ("Jacob", 87.0)]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect();
    if let Some(average) = average_score(&scores) {
        print_labeled("average score", format!("{average:.2}"));
    }
    let rows: Vec<Vec<String>> = Status::ALL
        .iter()
        .map(|status| {
            let style = status.style();
            vec![
                format!("{status:?}").to_lowercase(),
                style.color.to_string(),
                style.icon.to_string(),
            ]
        })
        .collect();
    print_table(&["status", "color", "icon"], &rows);
    print_spacer();

    print_section("Filter, map, reduce");
    let numbers: Vec<i64> = (1..=10).collect();
    print_labeled("sum of even squares in 1..=10", sum_of_even_squares(&numbers));

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).context("Failed to render record")
}
