//! Logger setup for browser and native builds.

use preview_core::LogLevel;

/// Install the global logger at the given level.
///
/// In the browser messages go to the devtools console; natively they go to
/// stderr through `env_logger`, where `RUST_LOG` still takes precedence.
/// Calling this again after a logger is installed only adjusts the level.
pub fn init_logging(level: LogLevel) {
    #[cfg(target_arch = "wasm32")]
    let installed = console_log::init_with_level(level.to_level()).is_ok();

    #[cfg(not(target_arch = "wasm32"))]
    let installed = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
        .is_ok();

    if !installed {
        log::set_max_level(level.to_level_filter());
    }
}
