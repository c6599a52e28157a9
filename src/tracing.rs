//! Tracing initialization for the demo binary.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing: INFO by default, overridable via `RUST_LOG`, writing
/// to stderr so filtered results on stdout stay clean. Safe to call multiple
/// times.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

        if let Err(e) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
        {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
