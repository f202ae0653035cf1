//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

pub(crate) fn normalize_level_directives(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "info".to_owned();
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "trace" => "trace".to_owned(),
        "debug" => "debug".to_owned(),
        "info" => "info".to_owned(),
        "warn" | "warning" => "warn".to_owned(),
        "error" => "error".to_owned(),
        // Anything else is an `EnvFilter` directive string.
        _ => trimmed.to_owned(),
    }
}

/// `RUST_LOG` wins over the configured level; an unparsable filter falls back to `info`.
pub fn env_filter(configured: &str, rust_log: Option<&str>) -> EnvFilter {
    let rust_log = rust_log.map(str::trim).filter(|value| !value.is_empty());
    let directives = match rust_log {
        Some(env) => env.to_owned(),
        None => normalize_level_directives(configured),
    };
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(configured: &str) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = env_filter(configured, rust_log.as_deref());
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    if let Err(err) = result {
        tracing::debug!("tracing subscriber already installed: {err}");
    }
}
