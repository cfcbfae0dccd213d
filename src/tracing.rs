//! Logging setup for the rfedit binary
//!
//! The console filter comes from `RUST_LOG` when set, otherwise from the
//! `-v` count on the command line:
//! - no flag: warnings only
//! - `-v`: info, e.g. loaded config and executed edits
//! - `-vv`: debug, every command with its event and undo counts
//! - `-vvv`: trace, every model event
//!
//! Targets worth filtering on are `command` (executed commands) and
//! `rfedit::events` (model events).
//!
//! A debug-level copy goes to `<config dir>/logs/rfedit.log`, rotated daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn console_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the console and file subscribers
pub fn init(verbosity: u8) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level(verbosity)));

    // stderr, so dumps on stdout stay parseable
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("Warning: file logging disabled: {}", e))
        .ok()
        .map(|logs_dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, "rfedit.log"))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
