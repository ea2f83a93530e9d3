//! Driving a test case under the standard libtest harness
//!
//! libtest has no skip state and reports failure only through panics. [`run()`]
//! bridges that gap: it owns the [`Harness`], prints the case report and
//! converts the handle's outcome into what libtest understands.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::Config;
use crate::error::Abort;
use crate::handle::Handle;
use crate::host::{Harness, TestContext, abort_reason};
use crate::logging;

/// How a case driven by [`run_with`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed { report: String },
    Failed { report: String },
    Skipped { report: String },
}

impl Outcome {
    pub fn report(&self) -> &str {
        match self {
            Outcome::Passed { report } | Outcome::Failed { report } | Outcome::Skipped { report } => report,
        }
    }
}

/// Run `body` as one test case and hand back its outcome.
///
/// A case that skips after recording a failure still counts as failed.
/// Panics that did not come from the harness (a plain `panic!`, a failed
/// `assert!`) are re-raised after the report is printed.
pub fn run_with<F>(config: &Config, name: &str, body: F) -> Outcome
where
    F: FnOnce(&Handle),
{
    let host = Arc::new(Harness::new());
    let is = Handle::new_case(host.clone(), name);

    let result = panic::catch_unwind(AssertUnwindSafe(|| body(&is)));
    let report = is.done();

    if let Err(payload) = result {
        match abort_reason(payload.as_ref()) {
            // A skip does not clear failures recorded before it
            Some(Abort::SkipNow) if !host.failed() => {
                tracing::debug!(case = name, "test case skipped");
                if config.should_print(false, true) {
                    println!("{report}");
                }
                return Outcome::Skipped { report };
            }
            Some(Abort::SkipNow) => {
                tracing::debug!(case = name, "test case skipped after failing");
            }
            Some(Abort::FailNow) => {
                tracing::debug!(case = name, "test case stopped by fatal failure");
            }
            None => {
                println!("{report}");
                panic::resume_unwind(payload);
            }
        }
    }

    let failed = host.failed();
    if config.should_print(failed, false) {
        println!("{report}");
    }

    if failed {
        Outcome::Failed { report }
    } else {
        Outcome::Passed { report }
    }
}

/// Run `body` as one libtest case.
///
/// Configuration comes from the environment (see [`Config`]). Passing and
/// skipped cases return normally; a failed case panics with its report.
///
/// ```no_run
/// #[test]
/// fn arithmetic() {
///     testy::run("arithmetic", |is| {
///         is.expect_eq(1 + 1, 2);
///         testy::label!(is, "Checking", 3).expect_true(3 % 2 == 1);
///     });
/// }
/// ```
pub fn run<F>(name: &str, body: F)
where
    F: FnOnce(&Handle),
{
    let config = Config::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default configuration");
        Config::default()
    });
    logging::init_tracing(&config);

    if let Outcome::Failed { report } = run_with(&config, name, body) {
        panic!("{report}");
    }
}
