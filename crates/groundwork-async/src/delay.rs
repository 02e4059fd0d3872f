//! Deferred values.

use std::time::Duration;

use tracing::trace;

/// Message produced by [`fetch_data`].
pub const DATA_LOADED: &str = "data loaded successfully";

/// Waits for `duration`.
pub async fn delay(duration: Duration) {
    trace!(ms = duration.as_millis() as u64, "delay");
    tokio::time::sleep(duration).await;
}

/// Resolves to [`DATA_LOADED`] after `latency`.
pub async fn fetch_data(latency: Duration) -> String {
    delay(latency).await;
    DATA_LOADED.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn fetch_data_resolves_after_latency() {
        let start = Instant::now();
        let data = fetch_data(Duration::from_millis(1000)).await;

        assert_eq!(data, DATA_LOADED);
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }
}
