//! Subscriber setup. Logs go to stderr so stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

/// Picks the filter: `RUST_LOG` wins, then `-v` flags, then the configured
/// level.
fn filter(configured: &str, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let directive = match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("warning: invalid log level `{directive}` ({err}), using `warn`");
        EnvFilter::new("warn")
    })
}

/// Installs the global subscriber.
pub fn init(configured: &str, verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(configured, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
