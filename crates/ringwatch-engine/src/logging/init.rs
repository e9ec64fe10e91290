use std::sync::Once;

static START: Once = Once::new();

/// Installs the global `env_logger`, at most once.
///
/// `RUST_LOG` wins when set; otherwise `fallback_filter` applies (binaries
/// pass `"info"`). Repeat calls are no-ops, so tests may call this freely.
pub fn init_logging(fallback_filter: &str) {
    START.call_once(|| {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(fallback_filter),
        )
        .init();
    });
}
