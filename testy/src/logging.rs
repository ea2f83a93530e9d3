//! Tracing setup for test binaries

use crate::config::Config;

/// Install a `fmt` subscriber writing through libtest's captured output.
///
/// Safe to call from every test: only the first call in a process installs
/// a subscriber, later calls (or a subscriber installed elsewhere) win.
pub fn init_tracing(config: &Config) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|err| {
        eprintln!("⚠️  Ignoring invalid {}: {err}", crate::config::LOG_VAR);
        EnvFilter::new(Config::default().log_filter)
    });

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
