//! flipline Core
//!
//! Shared building blocks for the flipline crates: layout geometry used for
//! measurement and hit-testing, `glam` math re-exports, fast hash collections,
//! logging and profiling setup.

pub mod alloc;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{Config, ProfilingMode};

/// Initialize logging (and profiling, if requested) from a [`Config`].
pub fn init(config: &Config) {
    logging::init_with_filter(&config.log_filter);

    match config.profiling {
        ProfilingMode::Off => {}
        ProfilingMode::Scopes => profiling::enable_scopes(),
        #[cfg(feature = "profiling")]
        ProfilingMode::Server => profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp),
    }
}
