use env_logger::Env;

/// Set up `env_logger` for the solver.
///
/// `RUST_LOG` takes precedence; without it the solver logs at `info`, or `debug` when `debug_enabled`.
pub fn init_logger(debug_enabled: bool) {
    let default_filter = if debug_enabled { "debug" } else { "info" };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
