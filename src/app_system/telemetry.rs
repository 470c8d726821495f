/// Configure tracing once at application startup for the whole process.
///
/// `RUST_LOG` controls verbosity (default `info`):
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=profile_widget::widget=debug,profile_widget::api=warn cargo run
/// ```
///
/// The library never calls this itself; embedding applications install their
/// own subscriber.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
