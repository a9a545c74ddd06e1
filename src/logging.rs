use crate::models::config::LoggingConfig;
use std::str::FromStr;
use tracing::Level;

/// Install the global tracing subscriber
///
/// Returns `false` when a subscriber was already installed (e.g. by the
/// host), in which case the existing one is kept.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let level = parse_level(&config.level);

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(level)
            .with_current_span(false)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::info!(
            level = %level,
            json = config.json,
            platform = std::env::consts::OS,
            "Logging initialized"
        );
    }
    installed
}

/// Unknown level names fall back to INFO
fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level(" error "), Level::ERROR);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = LoggingConfig::default();
        init_logging(&config);
        assert!(!init_logging(&config));
    }
}
