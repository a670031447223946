//! Tracing setup for the CLI.
//!
//! Diagnostics go to stderr so stdout stays clean for tables and
//! completions. `RUST_LOG` overrides the default level. With `--timing`,
//! every `#[instrument]`ed command logs its duration when its span closes.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Default level: debug with `--verbose`, info with `--timing` (span close
/// events are info), warn otherwise.
fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    match (verbose, timing) {
        (true, _) => LevelFilter::DEBUG,
        (false, true) => LevelFilter::INFO,
        (false, false) => LevelFilter::WARN,
    }
}

pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
