use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::list::SortOrder;

/// Application configuration.
///
/// Only the settings the state layer consumes; window placement, theme and
/// the like belong to the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Sort order the login list starts with.
    #[serde(default)]
    pub default_sort_order: SortOrder,

    /// When the vault locks itself after the app leaves the foreground.
    #[serde(default)]
    pub auto_lock: AutoLockTime,
}

/// Auto-lock delay options offered in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoLockTime {
    Immediately,
    OneMinute,
    FiveMinutes,
    OneHour,
    TwelveHours,
    TwentyFourHours,
    Never,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Whether backgrounding the app should lock the vault right away.
    /// Delayed options arm a timer owned by the shell.
    pub fn locks_on_background(&self) -> bool {
        matches!(self.auto_lock, AutoLockTime::Immediately)
    }
}

impl AutoLockTime {
    /// Delay before the lock fires; `None` means never.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Immediately => Some(Duration::ZERO),
            Self::OneMinute => Some(Duration::from_secs(60)),
            Self::FiveMinutes => Some(Duration::from_secs(5 * 60)),
            Self::OneHour => Some(Duration::from_secs(60 * 60)),
            Self::TwelveHours => Some(Duration::from_secs(12 * 60 * 60)),
            Self::TwentyFourHours => Some(Duration::from_secs(24 * 60 * 60)),
            Self::Never => None,
        }
    }
}

impl Default for AutoLockTime {
    fn default() -> Self {
        Self::FiveMinutes
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_sort_order: SortOrder::default(),
            auto_lock: AutoLockTime::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_alphabetical_and_five_minutes() {
        let config = AppConfig::default();
        assert_eq!(config.default_sort_order, SortOrder::Alphabetical);
        assert_eq!(config.auto_lock, AutoLockTime::FiveMinutes);
        assert!(!config.locks_on_background());
    }

    #[test]
    fn parses_from_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            default_sort_order = "recently_used"
            auto_lock = "immediately"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_sort_order, SortOrder::RecentlyUsed);
        assert_eq!(config.auto_lock, AutoLockTime::Immediately);
        assert!(config.locks_on_background());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_unknown_auto_lock_value() {
        let result = AppConfig::from_toml_str("auto_lock = \"sometimes\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn delays_are_monotonic_until_never() {
        assert_eq!(AutoLockTime::Immediately.delay(), Some(Duration::ZERO));
        assert_eq!(AutoLockTime::OneMinute.delay(), Some(Duration::from_secs(60)));
        assert_eq!(AutoLockTime::Never.delay(), None);
    }
}
