use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-writer subscriber. Safe to call from every test; only
/// the first call in a binary wins.
pub fn init_test() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
