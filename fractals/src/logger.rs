use env_logger::Env;

/// Initializes the global logger; `RUST_LOG` overrides the `info` default.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
