//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with the summary on stdout. The level
//! is chosen by the `--verbose` flag alone.

use std::io::IsTerminal;

use tracing::Level;

/// Installs the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
