//! Tracing subscriber setup for the binary.

use crate::config::Config;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so that stdout only carries results. An unparsable
/// `RUST_LOG` directive falls back to `info`. With `COLOR=auto`, ANSI colors
/// are used only when stderr is a terminal.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(config, std::io::stderr().is_terminal()));

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn use_ansi(config: &Config, stderr_is_terminal: bool) -> bool {
    config.color_override().unwrap_or(stderr_is_terminal)
}
