//! Log output for the seed binaries.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber, honoring `RUST_LOG` and defaulting to `info`.
///
/// Colors are only used when stdout is a terminal.
pub fn init() {
    tracing_subscriber::fmt()
        .with_ansi(std::io::stdout().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
