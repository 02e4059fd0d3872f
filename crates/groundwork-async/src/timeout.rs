//! Abort-with-timeout wrapper.
//!
//! Stops waiting once the deadline passes and raises
//! [`AsyncError::TimedOut`]. The wrapped future is dropped; no cancellation
//! signal is propagated beyond that.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::delay::delay;
use crate::error::{AsyncError, Result};

/// Awaits `future` for at most `limit`.
pub async fn with_timeout<F>(limit: Duration, future: F) -> Result<F::Output>
where
    F: Future,
{
    tokio::time::timeout(limit, future).await.map_err(|_| {
        warn!(limit_ms = limit.as_millis() as u64, "deadline elapsed");
        AsyncError::TimedOut { after: limit }
    })
}

/// Simulated work that finishes after `duration`.
pub async fn slow_work(duration: Duration) -> String {
    delay(duration).await;
    format!("work finished after {}ms", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fast_work_passes_through() {
        let work = slow_work(Duration::from_millis(50));
        let result = with_timeout(Duration::from_millis(200), work).await;
        assert_eq!(result.as_deref(), Ok("work finished after 50ms"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_work_stops_waiting_at_the_deadline() {
        let start = Instant::now();
        let limit = Duration::from_millis(200);

        let result = with_timeout(limit, slow_work(Duration::from_secs(10))).await;

        assert_eq!(result, Err(AsyncError::TimedOut { after: limit }));
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn timeout_message_is_readable() {
        let err = AsyncError::TimedOut {
            after: Duration::from_millis(2000),
        };
        assert_eq!(err.to_string(), "timed out after 2000ms");
    }
}
