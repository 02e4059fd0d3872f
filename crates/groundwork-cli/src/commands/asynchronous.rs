//! Async lessons: sequential chain, concurrent fan-out, caught failures and
//! timeouts.

use std::time::Duration;

use anyhow::{Context, Result};
use groundwork_async::{
    ChainStage, ChainStep, FanoutFaults, Timings, load_user_posts, run_chain, slow_work,
    test_operation, with_timeout,
};
use tracing::info;

use super::block_on;
use crate::style::{
    create_spinner, finish_and_clear, print_caught, print_item, print_labeled, print_section,
    print_success,
};

/// Runs the chain; a failing step is caught here, once, and reported.
pub fn chain(timings: &Timings, fail: Option<ChainStage>) -> Result<()> {
    let result = block_on(run_chain(timings, fail, |step| match step {
        ChainStep::DataLoaded(data) => print_labeled("data", data),
        ChainStep::DelayCompleted => print_item("delay completed"),
    }))?;

    match result {
        Ok(steps) => info!(steps = steps.len(), "chain lesson finished"),
        Err(e) => print_caught(&e.to_string()),
    }
    Ok(())
}

/// Options for the fan-out lesson; `None` delays fall back to config.
#[derive(Debug, Clone, Copy, Default)]
pub struct FanoutArgs {
    pub user_id: u32,
    pub user_delay: Option<u64>,
    pub posts_delay: Option<u64>,
    pub faults: FanoutFaults,
}

pub fn fanout(timings: &Timings, args: FanoutArgs) -> Result<()> {
    let user_delay = args.user_delay.map_or(timings.user, Duration::from_millis);
    let posts_delay = args.posts_delay.map_or(timings.posts, Duration::from_millis);

    let spinner = create_spinner("Fetching user and posts concurrently...");
    let joined = block_on(load_user_posts(
        args.user_id,
        user_delay,
        posts_delay,
        args.faults,
    ));
    finish_and_clear(&spinner);
    let joined = match joined? {
        Ok(joined) => joined,
        Err(e) => {
            print_caught(&e.to_string());
            return Ok(());
        }
    };

    print_section(&format!("user: {} (id {})", joined.user.name, joined.user.id));
    print_section("posts:");
    for post in &joined.posts {
        print_item(&format!("#{} {}", post.id, post.title));
    }
    print_labeled(
        "total time",
        format!(
            "{}ms (user delay: {}ms, posts delay: {}ms)",
            joined.elapsed.as_millis(),
            user_delay.as_millis(),
            posts_delay.as_millis()
        ),
    );
    Ok(())
}

pub fn risky(timings: &Timings) -> Result<()> {
    for line in block_on(test_operation(timings.risky))? {
        println!("{line}");
    }
    Ok(())
}

pub fn timeout(timings: &Timings, work_ms: u64) -> Result<()> {
    let work = Duration::from_millis(work_ms);

    let spinner = create_spinner(&format!(
        "Waiting up to {}ms...",
        timings.timeout.as_millis()
    ));
    let result = block_on(with_timeout(timings.timeout, slow_work(work)));
    finish_and_clear(&spinner);

    let message = result?.context("Work did not finish in time")?;
    print_success(&message);
    Ok(())
}
