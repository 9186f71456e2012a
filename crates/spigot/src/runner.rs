//! Drives a generator to completion.
//!
//! Stop conditions are only checked between groups; a pass over the table
//! always runs to the end once started.

use crate::error::SpigotError;
use crate::generator::{DigitGroup, PiDigits};
use crate::verify::verify;
use spigot_params::specs::defaults;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Decimal digits to generate
    pub digits: usize,
    /// Optional timeout in milliseconds
    pub timeout_ms: Option<u64>,
    /// Check the output against the trusted reference digits
    pub verify: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            digits: defaults::DIGITS,
            timeout_ms: None,
            verify: false,
        }
    }
}

/// Shared flag for cancelling a run from another thread
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Why a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every group was generated
    Completed,
    /// The cancel token was triggered
    Cancelled,
    /// Timeout reached
    Timeout,
}

/// Result of a run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub groups: Vec<DigitGroup>,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn is_complete(&self) -> bool {
        self.stop_reason == StopReason::Completed
    }

    /// Concatenate the groups, zero-padded, with no separators
    pub fn render(&self) -> String {
        self.groups.iter().map(|group| group.to_string()).collect()
    }
}

/// Runs one generator under the configured stop conditions
pub struct Runner {
    digits: PiDigits,
    timeout_ms: Option<u64>,
    verify: bool,
    cancel: CancelToken,
    start_time: Instant,
}

impl Runner {
    /// Create a runner; fails before any digit is produced on bad input
    pub fn new(config: RunConfig) -> Result<Self, SpigotError> {
        let digits = PiDigits::new(config.digits)?;
        info!(
            "Generating {} digits ({} groups, table length {})",
            config.digits,
            digits.len(),
            digits.table_len()
        );

        Ok(Self {
            digits,
            timeout_ms: config.timeout_ms,
            verify: config.verify,
            cancel: CancelToken::new(),
            start_time: Instant::now(),
        })
    }

    /// Replace the runner's cancel token with a shared one
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Token that cancels this runner
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Check if any stop condition other than completion is met
    pub fn should_stop(&self) -> Option<StopReason> {
        if self.cancel.is_cancelled() {
            info!("Cancelled with {} groups remaining", self.digits.len());
            return Some(StopReason::Cancelled);
        }

        if let Some(timeout_ms) = self.timeout_ms {
            let elapsed_ms = self.start_time.elapsed().as_millis();
            if elapsed_ms >= u128::from(timeout_ms) {
                info!("Timeout reached: {} ms", elapsed_ms);
                return Some(StopReason::Timeout);
            }
        }

        None
    }

    /// Run until every group is generated or a stop condition is reached
    pub fn run(mut self) -> Result<RunOutcome, SpigotError> {
        // Timeout counts from here, not from construction
        self.start_time = Instant::now();
        let mut groups = Vec::with_capacity(self.digits.len());
        let stop_reason = loop {
            if let Some(reason) = self.should_stop() {
                break reason;
            }
            match self.digits.next() {
                Some(group) => groups.push(group),
                None => break StopReason::Completed,
            }
        };

        let outcome = RunOutcome {
            groups,
            stop_reason,
            elapsed: self.start_time.elapsed(),
        };

        if self.verify && outcome.is_complete() {
            verify(&outcome.groups)?;
        }

        Ok(outcome)
    }
}
