use tracing_subscriber::{EnvFilter, fmt};

/// Installs the stderr subscriber; `RUST_LOG` overrides the default `warn`
/// level, e.g. `RUST_LOG=winxray_core=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(false)
        .init();
}
