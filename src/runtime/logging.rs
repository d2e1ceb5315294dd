use tracing_subscriber::EnvFilter;

/// Install the stderr fmt subscriber.
///
/// Without `-v`, `RUST_LOG` decides and defaults to `warn`.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,music_index=debug"),
        _ => EnvFilter::new("warn,music_index=trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
