use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for this process
///
/// The filter comes from the environment (`RUST_LOG`) when set, otherwise
/// from `default_level`. Output goes to stderr, with ANSI colors only when
/// stderr is a terminal.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // A second init (e.g. from tests) is harmless
    let _ = subscriber.try_init();
}
