//! Console log level for the wasm logger
use log::Level;

/// `Debug` for debug builds, `Info` for release builds.
#[must_use]
pub const fn default_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}
