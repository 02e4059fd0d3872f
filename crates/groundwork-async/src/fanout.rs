//! # Concurrent fan-out with a pairwise join
//!
//! Two independent fetches run at the same time and are joined only when
//! both have finished. Total latency is the longer of the two delays, not
//! their sum. If either branch fails, the join fails immediately with that
//! branch's error and the other branch is dropped.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::delay::delay;
use crate::error::{AsyncError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
}

/// Which branches of the fan-out should fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanoutFaults {
    pub user: bool,
    pub posts: bool,
}

/// Joined result of [`load_user_posts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPosts {
    pub user: User,
    pub posts: Vec<Post>,
    /// Measured wall time of the join.
    pub elapsed: Duration,
}

/// Resolves to `user-<id>` after `latency`.
pub async fn fetch_user(id: u32, latency: Duration) -> User {
    delay(latency).await;
    User {
        id,
        name: format!("user-{id}"),
    }
}

/// Resolves to two posts by `user-<user_id>` after `latency`.
pub async fn fetch_posts(user_id: u32, latency: Duration) -> Vec<Post> {
    delay(latency).await;
    (1..=2)
        .map(|id| Post {
            id,
            title: format!("post {id} by user-{user_id}"),
        })
        .collect()
}

async fn try_fetch_user(id: u32, latency: Duration, fail: bool) -> Result<User> {
    let user = fetch_user(id, latency).await;
    if fail {
        debug!(user_id = id, "user fetch failed");
        return Err(AsyncError::FetchFailed {
            resource: "user",
            user_id: id,
        });
    }
    Ok(user)
}

async fn try_fetch_posts(user_id: u32, latency: Duration, fail: bool) -> Result<Vec<Post>> {
    let posts = fetch_posts(user_id, latency).await;
    if fail {
        debug!(user_id, "posts fetch failed");
        return Err(AsyncError::FetchFailed {
            resource: "posts",
            user_id,
        });
    }
    Ok(posts)
}

/// Fetches a user and their posts concurrently.
pub async fn load_user_posts(
    user_id: u32,
    user_latency: Duration,
    posts_latency: Duration,
    faults: FanoutFaults,
) -> Result<UserPosts> {
    let start = Instant::now();

    let (user, posts) = tokio::try_join!(
        try_fetch_user(user_id, user_latency, faults.user),
        try_fetch_posts(user_id, posts_latency, faults.posts),
    )?;

    let elapsed = start.elapsed();
    info!(
        user_id,
        elapsed_ms = elapsed.as_millis() as u64,
        "joined user and posts"
    );

    Ok(UserPosts {
        user,
        posts,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: Duration = Duration::from_millis(1000);
    const SHORT: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn join_waits_for_the_longer_branch_only() {
        let joined = load_user_posts(1, LONG, SHORT, FanoutFaults::default())
            .await
            .unwrap();

        assert_eq!(joined.user.name, "user-1");
        assert_eq!(joined.posts.len(), 2);
        assert_eq!(joined.posts[1].title, "post 2 by user-1");

        assert!(joined.elapsed >= LONG);
        assert!(joined.elapsed < LONG + SHORT, "branches ran sequentially");
    }

    #[tokio::test(start_paused = true)]
    async fn fast_failure_does_not_wait_for_slow_branch() {
        let start = Instant::now();
        let faults = FanoutFaults {
            posts: true,
            ..FanoutFaults::default()
        };

        let result = load_user_posts(7, LONG, SHORT, faults).await;

        assert_eq!(
            result,
            Err(AsyncError::FetchFailed {
                resource: "posts",
                user_id: 7
            })
        );
        assert!(start.elapsed() >= SHORT);
        assert!(start.elapsed() < LONG);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_failure_surfaces_its_own_error() {
        let faults = FanoutFaults {
            user: true,
            ..FanoutFaults::default()
        };

        let result = load_user_posts(3, LONG, SHORT, faults).await;

        assert_eq!(
            result,
            Err(AsyncError::FetchFailed {
                resource: "user",
                user_id: 3
            })
        );
    }
}
