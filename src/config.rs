//! Application Configuration
//!
//! The page has no settings UI; the only knob is the console log level,
//! taken from the query string (`index.html?log=debug`).

use log::LevelFilter;

/// Name offered for the exported file
pub const EXPORT_FILE_NAME: &str = "tasks.json";
/// MIME type of the exported file
pub const EXPORT_MIME: &str = "application/json";

const LOG_PARAM: &str = "log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
        }
    }
}

impl AppConfig {
    /// Parse a `location.search` string. Unknown keys and bad values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let pairs = search.trim_start_matches('?').split('&').filter_map(|p| p.split_once('='));
        for (key, value) in pairs {
            if key == LOG_PARAM {
                if let Ok(level) = value.parse::<LevelFilter>() {
                    config.log_level = level;
                }
            }
        }
        config
    }

    /// Read the configuration from the current page URL
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        assert_eq!(AppConfig::default().log_level, LevelFilter::Warn);
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
    }

    #[test]
    fn test_log_level_from_query() {
        assert_eq!(AppConfig::from_query("?log=debug").log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::from_query("?theme=dark&log=TRACE").log_level, LevelFilter::Trace);
        assert_eq!(AppConfig::from_query("?log=off").log_level, LevelFilter::Off);
    }

    #[test]
    fn test_bad_values_ignored() {
        assert_eq!(AppConfig::from_query("?log=loud").log_level, LevelFilter::Warn);
        assert_eq!(AppConfig::from_query("?log").log_level, LevelFilter::Warn);
    }
}
