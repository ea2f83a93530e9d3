//! The host test context a handle reports to
//!
//! The facade never decides how a test ends. It marks failures and asks the
//! host to stop; what stopping means belongs to the [`TestContext`]
//! implementation.

use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Abort;

/// Host-side test primitives
pub trait TestContext: Send + Sync {
    /// Mark the test as failed and keep going
    fn fail(&self);

    /// Mark the test as failed and stop it immediately
    fn fail_now(&self) -> !;

    /// Mark the test as skipped and stop it immediately
    fn skip_now(&self) -> !;

    fn failed(&self) -> bool;

    fn skipped(&self) -> bool;
}

/// Test context for the standard libtest harness.
///
/// Status lives in atomics so handles on other threads can report into it.
/// Stopping unwinds with an [`Abort`] payload through
/// `std::panic::resume_unwind`, which skips the panic hook; [`run`](crate::run())
/// turns that payload back into a test outcome.
#[derive(Debug, Default)]
pub struct Harness {
    failed: AtomicBool,
    skipped: AtomicBool,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TestContext for Harness {
    fn fail(&self) {
        self.failed.store(true, Ordering::SeqCst);
    }

    fn fail_now(&self) -> ! {
        self.fail();
        tracing::debug!("stopping test case after failure");
        panic::resume_unwind(Box::new(Abort::FailNow))
    }

    fn skip_now(&self) -> ! {
        self.skipped.store(true, Ordering::SeqCst);
        tracing::debug!("stopping test case as skipped");
        panic::resume_unwind(Box::new(Abort::SkipNow))
    }

    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    fn skipped(&self) -> bool {
        self.skipped.load(Ordering::SeqCst)
    }
}

/// The [`Abort`] carried by an unwind payload, if it is one of ours
pub fn abort_reason(payload: &(dyn std::any::Any + Send)) -> Option<Abort> {
    payload.downcast_ref::<Abort>().copied()
}
