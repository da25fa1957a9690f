use tracing_subscriber::EnvFilter;

/// Initialise tracing for the plugin. With `debug` set this crate logs at
/// debug level while everything else stays at `info`; the `RUST_LOG`
/// environment variable may override the filter, but only when debug
/// logging is enabled, so a stray variable cannot make a normal session
/// verbose.
///
/// The host process may have installed a subscriber of its own already;
/// `try_init` turns the second installation into a no-op.
pub fn init(debug: bool) {
    let directives = if debug { "info,scrollnav=debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
    } else {
        EnvFilter::new(directives)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
