//! Shared failure counter and output log for one test case

use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Ledger {
    fail_count: usize,
    output: Vec<String>, // any logging, not just failures
}

/// Lock-guarded record shared by every handle derived from one root.
///
/// Each operation takes the lock on its own; appending a message and
/// counting the failure it reports are two separate critical sections.
#[derive(Debug, Default)]
pub struct Accumulator {
    ledger: Mutex<Ledger>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    // The ledger is append-only, so a panic mid-update cannot leave it torn.
    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fail_count(&self) -> usize {
        self.ledger().fail_count
    }

    /// Copy of the recorded messages, oldest first
    pub fn output(&self) -> Vec<String> {
        self.ledger().output.clone()
    }

    /// Store a decorated message with surrounding whitespace removed
    pub fn log(&self, message: &str) {
        let entry = message.trim().to_string();
        tracing::trace!(entry = %entry, "recording output");
        self.ledger().output.push(entry);
    }

    pub fn inc_fail_count(&self) {
        let mut ledger = self.ledger();
        ledger.fail_count += 1;
        tracing::debug!(fail_count = ledger.fail_count, "failure recorded");
    }
}
