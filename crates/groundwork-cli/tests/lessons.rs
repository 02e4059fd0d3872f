//! End-to-end tests for each lesson subcommand.
//!
//! Every test points `--project` at a temp directory whose groundwork.toml
//! zeroes the delays, so the async lessons finish immediately. `HOME` and
//! `XDG_CONFIG_HOME` point at the same directory and inherited `GW_*`
//! variables are removed, so only the project file and per-test overrides
//! reach the loader.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAST_CONFIG: &str = r#"
[project]
name = "lesson-tests"

[timing]
fetch_delay_ms = 0
settle_delay_ms = 0
user_delay_ms = 0
posts_delay_ms = 0
risky_delay_ms = 0
timeout_ms = 200

[output]
color = false
"#;

fn fast_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("groundwork.toml"), FAST_CONFIG).unwrap();
    temp
}

fn groundwork(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("groundwork").unwrap();
    cmd.arg("--project")
        .arg(project.path())
        .env("HOME", project.path())
        .env("XDG_CONFIG_HOME", project.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("GW_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

// ============================================================================
// Stack and unions
// ============================================================================

#[test]
fn stack_pushes_peeks_and_pops() {
    let project = fast_project();
    groundwork(&project)
        .arg("stack")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pushed 12, 13, 14"))
        .stdout(predicate::str::contains("size: 3"))
        .stdout(predicate::str::contains("peek: 14"))
        .stdout(predicate::str::contains("Popped 14"))
        .stdout(predicate::str::contains("pop on empty: None"));
}

#[test]
fn stack_accepts_custom_values() {
    let project = fast_project();
    groundwork(&project)
        .args(["stack", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stack { items: [1, 2] }"))
        .stdout(predicate::str::contains("Popped 2"));
}

#[test]
fn shapes_reports_areas() {
    let project = fast_project();
    groundwork(&project)
        .arg("shapes")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "area of a circle with the radius of 5 is 78.54",
        ))
        .stdout(predicate::str::contains("is 100.00"));
}

#[test]
fn results_handles_both_outcomes() {
    let project = fast_project();
    groundwork(&project)
        .arg("results")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! this is your data"))
        .stdout(predicate::str::contains("Error! you got an error"));
}

#[test]
fn pets_bark_and_meow() {
    let project = fast_project();
    groundwork(&project)
        .arg("pets")
        .assert()
        .success()
        .stdout(predicate::str::contains("woof"))
        .stdout(predicate::str::contains("breed: Bulldog"))
        .stdout(predicate::str::contains("meow"))
        .stdout(predicate::str::contains("color: yellow"));
}

#[test]
fn pets_classifies_json_by_field_presence() {
    let project = fast_project();
    groundwork(&project)
        .args(["pets", "--json", r#"{"meow": null, "color": "grey"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cat"))
        .stdout(predicate::str::contains("color: grey"))
        .stdout(predicate::str::contains("woof").not());
}

#[test]
fn pets_rejects_ambiguous_json() {
    let project = fast_project();
    groundwork(&project)
        .args([
            "pets",
            "--json",
            r#"{"bark": true, "meow": true, "breed": "x"}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("both `bark` and `meow`"));
}

#[test]
fn pets_rejects_invalid_json() {
    let project = fast_project();
    groundwork(&project)
        .args(["pets", "--json", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pet must be valid JSON"));
}

#[test]
fn values_transform_by_variant() {
    let project = fast_project();
    groundwork(&project)
        .arg("values")
        .assert()
        .success()
        .stdout(predicate::str::contains("HELLO"))
        .stdout(predicate::str::contains("144"))
        .stdout(predicate::str::contains("2.76"));
}

// ============================================================================
// Guards, composition, records
// ============================================================================

#[test]
fn guards_catch_each_rejection() {
    let project = fast_project();
    groundwork(&project)
        .arg("guards")
        .assert()
        .success()
        .stdout(predicate::str::contains("caught: cannot divide 10 by zero"))
        .stdout(predicate::str::contains("17 is under 18"))
        .stdout(predicate::str::contains("insufficient balance"))
        .stdout(predicate::str::contains("below absolute zero"));
}

#[test]
fn guards_use_configured_legal_age() {
    let project = fast_project();
    groundwork(&project)
        .arg("guards")
        .env("GW_RULES__LEGAL_AGE", "21")
        .assert()
        .success()
        .stdout(predicate::str::contains("20 is under 21"));
}

#[test]
fn guards_finish_when_legal_age_exceeds_default_user_age() {
    let project = fast_project();
    groundwork(&project)
        .arg("guards")
        .env("GW_RULES__LEGAL_AGE", "30")
        .assert()
        .success()
        .stdout(predicate::str::contains("created: Bob <bob@email.com>, 39"))
        .stdout(predicate::str::contains("29 is under 30"))
        // Later sections still run.
        .stdout(predicate::str::contains("Temperature"))
        .stdout(predicate::str::contains("at least one number is required"));
}

// Other platforms resolve the user config dir without XDG_CONFIG_HOME.
#[cfg(target_os = "linux")]
#[test]
fn user_config_file_is_read_from_xdg_home() {
    let project = fast_project();
    let user_dir = project.path().join(".config").join("groundwork");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[rules]\nlegal_age = 40\n").unwrap();

    groundwork(&project)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legal_age\": 40"));
}

#[test]
fn oop_dispatches_through_traits() {
    let project = fast_project();
    groundwork(&project)
        .arg("oop")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bruno barks"))
        .stdout(predicate::str::contains("Bruno fetches ball"))
        .stdout(predicate::str::contains("Toyota Vios car started"));
}

#[test]
fn records_omit_sensitive_fields() {
    let project = fast_project();
    groundwork(&project)
        .arg("records")
        .assert()
        .success()
        .stdout(predicate::str::contains("bob@gmail.com"))
        .stdout(predicate::str::contains("bobpassword").not())
        .stdout(predicate::str::contains("sum of even squares in 1..=10: 220"));
}

// ============================================================================
// Async lessons
// ============================================================================

#[test]
fn chain_reports_steps_in_order() {
    let project = fast_project();
    groundwork(&project)
        .arg("chain")
        .assert()
        .success()
        .stdout(
            predicate::str::is_match("(?s)data: data loaded successfully.*delay completed")
                .unwrap(),
        );
}

#[test]
fn chain_failure_skips_later_steps_and_is_caught_once() {
    let project = fast_project();
    groundwork(&project)
        .args(["chain", "--fail", "fetch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data:").not())
        .stdout(predicate::str::contains("delay completed").not())
        .stdout(predicate::str::contains("caught: step `fetch` failed").count(1));
}

#[test]
fn chain_settle_failure_reports_loaded_data_first() {
    let project = fast_project();
    groundwork(&project)
        .args(["chain", "--fail", "settle"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(
                "(?s)data: data loaded successfully.*caught: step `settle` failed",
            )
            .unwrap(),
        )
        .stdout(predicate::str::contains("delay completed").not());
}

#[test]
fn fanout_joins_user_and_posts() {
    let project = fast_project();
    groundwork(&project)
        .arg("fanout")
        .assert()
        .success()
        .stdout(predicate::str::contains("user: user-1"))
        .stdout(predicate::str::contains("post 2 by user-1"))
        .stdout(predicate::str::contains("total time:"));
}

#[test]
fn fanout_branch_failure_fails_the_join() {
    let project = fast_project();
    groundwork(&project)
        .args(["fanout", "--fail-posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("caught: failed to fetch posts for user 1"))
        .stdout(predicate::str::contains("total time").not());
}

#[test]
fn risky_catches_the_failure() {
    let project = fast_project();
    groundwork(&project)
        .arg("risky")
        .assert()
        .success()
        .stdout(predicate::str::contains("success: operation successful"))
        .stdout(predicate::str::contains("caught error: operation failed"));
}

#[test]
fn timeout_passes_fast_work() {
    let project = fast_project();
    groundwork(&project)
        .args(["timeout", "--work", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work finished after 0ms"));
}

#[test]
fn timeout_aborts_slow_work() {
    let project = fast_project();
    groundwork(&project)
        .args(["timeout", "--work", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timed out after 200ms"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_show_json_reflects_project_file() {
    let project = fast_project();
    groundwork(&project)
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"lesson-tests\""))
        .stdout(predicate::str::contains("\"timeout_ms\": 200"));
}

#[test]
fn config_show_text_lists_sections() {
    let project = fast_project();
    groundwork(&project)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timing:"))
        .stdout(predicate::str::contains("Legal age: 18"));
}

#[test]
fn config_validate_accepts_project_file() {
    let project = fast_project();
    groundwork(&project)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn config_validate_rejects_zero_timeout() {
    let project = fast_project();
    let bad = project.path().join("bad.toml");
    std::fs::write(&bad, "[timing]\ntimeout_ms = 0\n").unwrap();

    groundwork(&project)
        .args(["config", "validate"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_ms must be greater than zero"));
}
