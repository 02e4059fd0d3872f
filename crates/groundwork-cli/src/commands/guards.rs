//! Guard lesson: each validator succeeds once, then fails on purpose.

use anyhow::Result;
use groundwork::guards::{
    BankAccount, MathOperation, NumberStats, Student, Temperature, add, calculate,
    create_user_with_minimum, divide, find_max, letter_grade, multiply, subtract,
};
use groundwork_config::GroundworkConfig;

use crate::style::{print_caught, print_labeled, print_section, print_spacer};

pub fn run(config: &GroundworkConfig) -> Result<()> {
    calculator()?;
    print_spacer();
    users(config.rules.legal_age)?;
    print_spacer();
    bank_account()?;
    print_spacer();
    student()?;
    print_spacer();
    temperature()?;
    print_spacer();
    numbers()
}

fn calculator() -> Result<()> {
    print_section("Calculator");
    let operations: [(&str, MathOperation); 4] = [
        ("+", add),
        ("-", subtract),
        ("*", multiply),
        ("/", divide),
    ];
    for (symbol, op) in operations {
        print_labeled(&format!("10 {symbol} 5"), calculate(op, 10.0, 5.0)?);
    }
    if let Err(e) = calculate(divide, 10.0, 0.0) {
        print_caught(&e.to_string());
    }
    Ok(())
}

fn users(legal_age: u32) -> Result<()> {
    print_section("Users");
    // 27 under the default minimum; stays accepted when the minimum is raised.
    let adult = legal_age.saturating_add(9);
    let bob = create_user_with_minimum(1, "Bob", "bob@email.com", adult, legal_age)?;
    print_labeled("created", format!("{} <{}>, {}", bob.name, bob.email, bob.age));

    let too_young = legal_age.saturating_sub(1);
    if let Err(e) = create_user_with_minimum(2, "Tim", "tim@email.com", too_young, legal_age) {
        print_caught(&e.to_string());
    }
    Ok(())
}

fn bank_account() -> Result<()> {
    print_section("Bank account");
    let mut account = BankAccount::new();
    account.deposit(1200.0)?;
    print_labeled("balance after depositing 1200", account.balance());
    account.withdraw(1000.0)?;
    print_labeled("balance after withdrawing 1000", account.balance());

    for result in [account.withdraw(5000.0), account.deposit(-1.0)] {
        if let Err(e) = result {
            print_caught(&e.to_string());
        }
    }
    print_labeled("balance", account.balance());
    Ok(())
}

fn student() -> Result<()> {
    print_section("Student");
    let mut bob = Student::new(1, "Bob");
    for grade in [97.0, 89.0, 91.0] {
        bob.add_grade(grade)?;
    }
    let grades: Vec<String> = bob.grades().iter().map(ToString::to_string).collect();
    print_labeled("grades", grades.join(", "));
    print_labeled("highest", bob.highest());
    print_labeled("average", format!("{:.2}", bob.average()));

    if let Err(e) = bob.add_grade(140.0) {
        print_caught(&e.to_string());
    }
    Ok(())
}

fn temperature() -> Result<()> {
    print_section("Temperature");
    let temp = Temperature::from_celsius(25.0)?;
    print_labeled("celsius", temp.celsius());
    print_labeled("fahrenheit", temp.fahrenheit());

    let boiling = temp.with_fahrenheit(212.0)?;
    print_labeled("212°F in celsius", boiling.celsius());

    if let Err(e) = temp.with_celsius(-300.0) {
        print_caught(&e.to_string());
    }
    Ok(())
}

fn numbers() -> Result<()> {
    print_section("Numbers");
    print_labeled("max of 1, 2, 3, 4", find_max(&[1.0, 2.0, 3.0, 4.0])?);

    let stats = NumberStats::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0])?;
    print_labeled(
        "stats of 1..=5",
        format!(
            "sum={} avg={} max={} min={}",
            stats.sum, stats.avg, stats.max, stats.min
        ),
    );
    print_labeled("grade for 89", letter_grade(89.0));

    if let Err(e) = find_max(&[]) {
        print_caught(&e.to_string());
    }
    Ok(())
}
