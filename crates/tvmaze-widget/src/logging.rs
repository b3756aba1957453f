//! Logging setup for the widget binary.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Verbosity maps as: 0 = info, 1 = debug (noisy HTTP internals
/// suppressed), 2+ = trace. `quiet` limits output to errors. A `RUST_LOG`
/// environment filter takes precedence when set.
pub fn init(verbose_level: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let default = match verbose_level {
            0 => "info",
            1 => "debug,hyper=warn,reqwest=info",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
