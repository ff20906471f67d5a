pub mod build_info;
pub mod paths;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr so schedule
/// output on stdout stays machine-readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rent_schedule=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
