//! The facade handle test code reports through
//!
//! A [`Handle`] is cheap to clone and never changes once handed out: labeling
//! and upleveling return new handles that share the original's host context
//! and accumulator. Every public entry point is `#[track_caller]` so the
//! decorated `file:line` names the test code rather than this module.

use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::Arc;

use crate::accumulator::Accumulator;
use crate::decorate::{self, ANONYMOUS};
use crate::host::TestContext;

#[derive(Clone)]
pub struct Handle {
    host: Arc<dyn TestContext>,
    record: Arc<Accumulator>,
    case_name: Arc<str>,
    label: String,
    uplevel: usize,
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("case_name", &self.case_name)
            .field("label", &self.label)
            .field("uplevel", &self.uplevel)
            .field("fail_count", &self.record.fail_count())
            .finish()
    }
}

/// Space-join the display form of every part
pub(crate) fn join_parts<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    parts
        .into_iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Handle {
    /// Wrap a host context, naming the case after the calling function.
    ///
    /// Falls back to `"Anonymous function"` when the caller's symbol cannot
    /// be resolved (stripped binaries, missing debug info).
    #[track_caller]
    pub fn new(host: Arc<dyn TestContext>) -> Self {
        let name = decorate::caller_name(Location::caller()).unwrap_or_else(|| {
            tracing::debug!("caller name unavailable, using {ANONYMOUS:?}");
            ANONYMOUS.to_string()
        });
        Self::new_case(host, name)
    }

    /// Wrap a host context under an explicit case name
    pub fn new_case(host: Arc<dyn TestContext>, name: impl Into<String>) -> Self {
        let case_name: Arc<str> = Arc::from(name.into());
        tracing::debug!(case = %case_name, "test case started");
        Self {
            host,
            record: Arc::new(Accumulator::new()),
            case_name,
            label: String::new(),
            uplevel: 1,
        }
    }

    /// A handle that prefixes every message with the space-joined parts
    /// followed by `": "`. Replaces any existing label.
    pub fn label<I>(&self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut derived = self.clone();
        derived.label = format!("{}: ", join_parts(parts).trim_end());
        derived
    }

    /// A handle that attributes messages `depth` frames further up the stack
    pub fn uplevel(&self, depth: usize) -> Self {
        let mut derived = self.clone();
        derived.uplevel = derived.uplevel.saturating_add(depth);
        derived
    }

    pub fn case_name(&self) -> &str {
        &self.case_name
    }

    /// Current label prefix, `""` when unlabeled
    pub fn prefix(&self) -> &str {
        &self.label
    }

    pub fn depth(&self) -> usize {
        self.uplevel
    }

    /// Number of failures recorded through any handle of this case
    pub fn fail_count(&self) -> usize {
        self.record.fail_count()
    }

    /// Copy of every message recorded through any handle of this case
    pub fn output(&self) -> Vec<String> {
        self.record.output()
    }

    /// Summary line followed by the recorded output, one entry per line.
    ///
    /// Leaves the accumulator untouched, so it can be called again.
    pub fn done(&self) -> String {
        let mut report = self.summary();
        report.push_str(&self.output().join("\n"));
        report
    }

    fn summary(&self) -> String {
        match self.record.fail_count() {
            0 => format!("{}: all tests passed\n", self.case_name),
            1 => format!("{}: 1 test failed\n", self.case_name),
            n => format!("{}: {n} tests failed\n", self.case_name),
        }
    }

    #[track_caller]
    pub(crate) fn write(&self, message: &str) {
        let site = decorate::resolve(Location::caller(), self.uplevel);
        self.record.log(&decorate::decorate(&site, &self.label, message));
    }

    /// Count, record and mark failed, without stopping
    #[track_caller]
    pub(crate) fn failure(&self, message: &str) {
        self.record.inc_fail_count();
        self.write(message);
        tracing::debug!(case = %self.case_name, label = %self.label, "assertion failed");
        self.host.fail();
    }

    // Facade functions over the host context

    /// Mark the test as failed
    pub fn fail(&self) {
        self.record.inc_fail_count();
        self.host.fail();
    }

    /// Mark the test as failed and stop it
    pub fn fail_now(&self) -> ! {
        self.record.inc_fail_count();
        self.host.fail_now()
    }

    pub fn failed(&self) -> bool {
        self.host.failed()
    }

    /// Record the space-joined parts
    #[track_caller]
    pub fn log<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.write(&join_parts(parts));
    }

    /// Record formatted arguments: `is.logf(format_args!("{} {}", a, b))`
    #[track_caller]
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        self.write(&args.to_string());
    }

    /// Equivalent to `log` followed by `fail`
    #[track_caller]
    pub fn error<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.failure(&join_parts(parts));
    }

    /// Equivalent to `logf` followed by `fail`
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.failure(&args.to_string());
    }

    /// Equivalent to `log` followed by `fail_now`
    #[track_caller]
    pub fn fatal<I>(&self, parts: I) -> !
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.record.inc_fail_count();
        self.write(&join_parts(parts));
        self.host.fail_now()
    }

    /// Equivalent to `logf` followed by `fail_now`
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.record.inc_fail_count();
        self.write(&args.to_string());
        self.host.fail_now()
    }

    /// Equivalent to `log` followed by `skip_now`
    #[track_caller]
    pub fn skip<I>(&self, parts: I) -> !
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.write(&join_parts(parts));
        self.host.skip_now()
    }

    /// Equivalent to `logf` followed by `skip_now`
    #[track_caller]
    pub fn skipf(&self, args: fmt::Arguments<'_>) -> ! {
        self.write(&args.to_string());
        self.host.skip_now()
    }

    /// Mark the test as skipped and stop it
    pub fn skip_now(&self) -> ! {
        self.host.skip_now()
    }

    pub fn skipped(&self) -> bool {
        self.host.skipped()
    }
}

/// Derive a labeled handle from heterogeneous parts:
/// `label!(is, "Checking", i)` labels messages `Checking 3: ...`.
#[macro_export]
macro_rules! label {
    ($handle:expr, $($part:expr),+ $(,)?) => {
        $handle.label([$(&$part as &dyn ::std::fmt::Display),+])
    };
}

/// Name of the enclosing function, resolved at compile time
#[macro_export]
macro_rules! case_name {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = name_of(here);
        let path = path.strip_suffix("::here").unwrap_or(path);
        $crate::decorate::function_name(path)
            .unwrap_or_else(|| $crate::decorate::ANONYMOUS.to_string())
    }};
}
