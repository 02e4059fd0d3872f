//! Fallible async operations caught at the await site.

use std::time::Duration;

use tracing::warn;

use crate::delay::delay;
use crate::error::{AsyncError, Result};

/// Resolves after `latency` to a success message, or fails when `success`
/// is false.
pub async fn risky_operation(success: bool, latency: Duration) -> Result<String> {
    delay(latency).await;
    if !success {
        return Err(AsyncError::OperationFailed);
    }
    Ok("operation successful".to_string())
}

/// Runs a succeeding and a failing operation, catching each failure once.
///
/// Returns the lines to print, in order.
pub async fn test_operation(latency: Duration) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);

    match risky_operation(true, latency).await {
        Ok(result) => lines.push(format!("success: {result}")),
        Err(e) => lines.push(format!("error: {e}")),
    }

    if let Err(e) = risky_operation(false, latency).await {
        warn!(error = %e, "risky operation failed");
        lines.push(format!("caught error: {e}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn success_and_failure() {
        let latency = Duration::from_millis(1000);
        assert_eq!(
            risky_operation(true, latency).await.as_deref(),
            Ok("operation successful")
        );
        assert_eq!(
            risky_operation(false, latency).await,
            Err(AsyncError::OperationFailed)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_operation_catches_once() {
        let lines = test_operation(Duration::from_millis(10)).await;
        assert_eq!(
            lines,
            vec![
                "success: operation successful".to_string(),
                "caught error: operation failed".to_string()
            ]
        );
    }
}
