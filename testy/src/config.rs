//! Environment-driven configuration
//!
//! Only [`run`](crate::run()) consults configuration; handles built directly
//! with [`Handle::new_case`](crate::Handle::new_case) behave the same under
//! every setting.

use std::env;
use std::str::FromStr;

use crate::error::{ConfigError, ConfigResult};

pub const LOG_VAR: &str = "TESTY_LOG";
pub const REPORT_VAR: &str = "TESTY_REPORT";

/// When [`run`](crate::run()) prints the `done()` report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Print after every case, passing or not
    Always,
    /// Print only when the case failed or was skipped
    Failures,
    /// Never print; a failing case still panics with the report
    Never,
}

impl Default for ReportMode {
    fn default() -> Self {
        ReportMode::Failures
    }
}

impl FromStr for ReportMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(ReportMode::Always),
            "failures" => Ok(ReportMode::Failures),
            "never" => Ok(ReportMode::Never),
            _ => Err(ConfigError::InvalidValue {
                field: REPORT_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    pub report: ReportMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "testy=warn".to_string(),
            report: ReportMode::default(),
        }
    }
}

impl Config {
    /// Read `TESTY_LOG` and `TESTY_REPORT` from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(mode) = lookup(REPORT_VAR) {
            config.report = mode.parse()?;
        }

        Ok(config)
    }

    /// Whether a finished case with the given status gets its report printed
    pub fn should_print(&self, failed: bool, skipped: bool) -> bool {
        match self.report {
            ReportMode::Always => true,
            ReportMode::Failures => failed || skipped,
            ReportMode::Never => false,
        }
    }
}
