use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor an explicit filter is given.
pub const DEFAULT_FILTER: &str = "info,flipline_ui=debug";

/// Install a `fmt` subscriber honouring `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a `fmt` subscriber with an explicit filter directive.
pub fn init_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    // A subscriber may already be set (tests, embedding apps); keep theirs.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
