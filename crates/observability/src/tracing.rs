//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::SystemTime;

use crate::config::{LogFormat, TracingConfig};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times: only the first successful call installs a
/// subscriber, and the return value says whether this call was that one.
/// Invalid filter directives fall back to `info`.
pub fn init_with(config: &TracingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_a_no_op() {
        let config = TracingConfig {
            filter: "not a [valid filter".to_string(),
            format: LogFormat::Compact,
        };
        // Other tests in this binary may have installed one already.
        let _ = init_with(&config);
        assert!(!init_with(&TracingConfig::default()));
        crate::init();
    }
}
