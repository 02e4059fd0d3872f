//! Stack lesson: push, peek, pop, and popping an empty stack.

use anyhow::Result;
use groundwork::Stack;

use crate::style::{print_labeled, print_section, print_spacer};

pub fn run(values: &[i64]) -> Result<()> {
    let mut stack = Stack::with_capacity(values.len());
    for value in values {
        stack.push(*value);
    }

    print_section(&format!("Pushed {}", join(values)));
    print_state(&stack);
    print_spacer();

    match stack.pop() {
        Some(top) => print_section(&format!("Popped {top}")),
        None => print_section("Nothing to pop"),
    }
    print_state(&stack);
    print_spacer();

    let drained: Vec<i64> = std::iter::from_fn(|| stack.pop()).collect();
    print_section("Drained");
    print_labeled("popped", join(&drained));
    print_labeled("pop on empty", format!("{:?}", stack.pop()));
    print_labeled("is_empty", stack.is_empty());

    Ok(())
}

fn print_state(stack: &Stack<i64>) {
    print_labeled("items", format!("{stack:?}"));
    print_labeled("size", stack.size());
    print_labeled("is_empty", stack.is_empty());
    print_labeled(
        "peek",
        stack
            .peek()
            .map_or_else(|| "none".to_string(), ToString::to_string),
    );
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
