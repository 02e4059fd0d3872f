//! # Sequential dependent steps
//!
//! ```text
//! fetch_data ──▶ report data ──▶ delay(settle) ──▶ report completion
//!      │                              │
//!      └──────── any failure ─────────┴──▶ caught once by the caller
//! ```
//!
//! Each step starts only after the previous one completes. A failure stops
//! the chain: later steps never run and the error reaches the caller once.

use tracing::{debug, info};

use crate::Timings;
use crate::delay::{delay, fetch_data};
use crate::error::{AsyncError, Result};

/// An event reported by the chain, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainStep {
    DataLoaded(String),
    DelayCompleted,
}

/// A stage that can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStage {
    Fetch,
    Settle,
}

impl ChainStage {
    fn name(self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Settle => "settle",
        }
    }
}

/// Runs the fetch-then-settle chain.
///
/// `on_step` sees each event as it happens, so the caller can print in real
/// time. The same events are returned once the chain finishes.
pub async fn run_chain<F>(
    timings: &Timings,
    fault: Option<ChainStage>,
    mut on_step: F,
) -> Result<Vec<ChainStep>>
where
    F: FnMut(&ChainStep),
{
    let mut steps = Vec::with_capacity(2);

    let data = fetch_data(timings.fetch).await;
    fail_if(fault, ChainStage::Fetch)?;
    record(&mut steps, &mut on_step, ChainStep::DataLoaded(data));

    delay(timings.settle).await;
    fail_if(fault, ChainStage::Settle)?;
    record(&mut steps, &mut on_step, ChainStep::DelayCompleted);

    info!(steps = steps.len(), "chain completed");
    Ok(steps)
}

fn fail_if(fault: Option<ChainStage>, stage: ChainStage) -> Result<()> {
    if fault == Some(stage) {
        debug!(stage = stage.name(), "injected chain failure");
        return Err(AsyncError::StepFailed { step: stage.name() });
    }
    Ok(())
}

fn record<F: FnMut(&ChainStep)>(steps: &mut Vec<ChainStep>, on_step: &mut F, step: ChainStep) {
    on_step(&step);
    steps.push(step);
}
