// ABOUTME: Logging setup for the clock app.
// ABOUTME: RUST_LOG overrides the default level; output is compact and goes to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
