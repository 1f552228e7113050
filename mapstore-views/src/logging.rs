use env_logger::Env;

/// Installs the global logger.
///
/// Log level defaults to `info` and can be changed with `RUST_LOG`. Calling it
/// more than once keeps the first logger.
pub fn init_logger() {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    if let Err(err) = result {
        log::debug!("Logger is already initialized: {err}");
    }
}
