//! Call-site attributing facade over the Rust test harness
//!
//! A [`Handle`] wraps a host [`TestContext`] and records every assertion
//! failure and log line as `file:line: message`, where `file:line` is the
//! code that called the handle, not the handle itself. Helpers can push that
//! attribution further up the stack with [`Handle::uplevel`] and tell loop
//! iterations apart with [`Handle::label`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use testy::{Handle, Harness};
//!
//! fn check_even(is: &Handle, n: i32) {
//!     let is = testy::label!(is.uplevel(1), "Testing", n);
//!     if n % 2 != 0 {
//!         is.error(["was not even"]);
//!     }
//! }
//!
//! let is = Handle::new_case(Arc::new(Harness::new()), "evens");
//! for n in 1..=4 {
//!     check_even(&is, n);
//! }
//! assert_eq!(is.fail_count(), 2);
//! assert!(is.done().starts_with("evens: 2 tests failed\n"));
//! ```
//!
//! Inside `#[test]` functions, [`run()`] drives a case end to end and turns
//! the outcome into a libtest pass, failure or (silent) skip.

pub mod accumulator;
pub mod assertions;
pub mod config;
pub mod decorate;
pub mod error;
pub mod handle;
pub mod host;
pub mod logging;
pub mod nil;
pub mod render;
pub mod run;

// Main interfaces
pub use handle::Handle;
pub use host::{Harness, TestContext};
pub use nil::{IsNil, Nil};
pub use run::{Outcome, run, run_with};

// Supporting types
pub use config::{Config, ReportMode};
pub use error::{Abort, ConfigError, ConfigResult};
