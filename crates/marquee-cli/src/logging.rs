use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `MARQUEE_LOG` was already folded into
/// `level` by the config service.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}, using 'info'", level, e);
        EnvFilter::new("info")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
