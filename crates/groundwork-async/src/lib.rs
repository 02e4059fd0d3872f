//! # groundwork-async: deferred computations on tokio
//!
//! Three shapes of async control flow:
//!
//! - [`chain`]: sequential dependent steps; the first failure short-circuits
//!   the rest and is caught once.
//! - [`fanout`]: two independent computations joined pairwise; the join is
//!   available after the longer one, and fails as soon as either fails.
//! - [`timeout`]: stop waiting after a deadline.
//!
//! All latencies are passed in through [`Timings`] so tests can run on a
//! paused clock.

use std::time::Duration;

pub mod chain;
pub mod delay;
pub mod error;
pub mod fanout;
pub mod risky;
pub mod timeout;

pub use chain::{ChainStage, ChainStep, run_chain};
pub use delay::{delay, fetch_data};
pub use error::{AsyncError, Result};
pub use fanout::{FanoutFaults, Post, User, UserPosts, load_user_posts};
pub use risky::{risky_operation, test_operation};
pub use timeout::{slow_work, with_timeout};

/// Latencies used by the async lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Step 1 of the chain.
    pub fetch: Duration,
    /// Step 2 of the chain.
    pub settle: Duration,
    /// User branch of the fan-out.
    pub user: Duration,
    /// Posts branch of the fan-out.
    pub posts: Duration,
    /// Each risky operation.
    pub risky: Duration,
    /// Deadline for [`with_timeout`].
    pub timeout: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fetch: Duration::from_millis(1000),
            settle: Duration::from_millis(500),
            user: Duration::from_millis(1000),
            posts: Duration::from_millis(500),
            risky: Duration::from_millis(1000),
            timeout: Duration::from_millis(2000),
        }
    }
}
