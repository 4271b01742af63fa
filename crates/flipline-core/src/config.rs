/// Process-wide configuration for flipline.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing` filter directive, e.g. `"flipline_ui=debug"`.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: crate::logging::DEFAULT_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Use a custom log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the profiling mode.
    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling is disabled
    Off,
    /// Puffin scopes are recorded, and can be inspected in-process
    Scopes,
    /// Puffin scopes are recorded and served to 'puffin_viewer' over HTTP
    #[cfg(feature = "profiling")]
    Server,
}
