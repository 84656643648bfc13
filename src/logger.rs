use log::error;

/// Sets up stderr logging at `info` (override with `RUST_LOG`) and makes panics
/// go through the same output.
pub fn init() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    std::panic::set_hook(Box::new(|info| {
        error!("Panicked: {}", info);
    }));
}
