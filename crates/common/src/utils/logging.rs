use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default `EnvFilter` directives for a deployment environment.
/// `prod` logs at info; everything else is treated as development and logs at debug.
pub fn default_filter_for(environment: &str) -> &'static str {
    if environment.eq_ignore_ascii_case("prod") {
        "info,tower_http=info,axum=info"
    } else {
        "debug,tower_http=debug,axum=info"
    }
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - Emits structured JSON logs for better machine parsing
pub fn init_logging_json() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_for("prod")));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber for an environment: JSON for `prod`, compact debug output otherwise.
pub fn init_logging_for(environment: &str) {
    if environment.eq_ignore_ascii_case("prod") {
        init_logging_json();
    } else {
        init_compact(default_filter_for(environment));
    }
}

/// Compact subscriber writing to stdout, `RUST_LOG` overrides the default directives.
fn init_compact(default_directives: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
