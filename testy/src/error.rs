//! Error and abort types for the testy facade

use thiserror::Error;

/// Unwind payload used to stop a test case early.
///
/// Raised by [`Harness`](crate::Harness) through `std::panic::resume_unwind`
/// and recognised by [`run`](crate::run()). Handles never catch it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abort {
    #[error("test case failed and stopped")]
    FailNow,

    #[error("test case skipped")]
    SkipNow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
