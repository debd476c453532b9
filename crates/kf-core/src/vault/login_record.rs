use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::LoginId;
use crate::vault::hostname::normalize_hostname;

/// A stored login as handed over by the sync engine.
///
/// Records are replaced wholesale on every list emission and never mutated
/// in place by this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRecord {
    pub id: LoginId,
    pub hostname: String,
    pub username: String,
    pub last_used_at_ms: i64,
}

impl LoginRecord {
    /// Hostname with the scheme prefix stripped, used as the display title
    /// and as the alphabetical sort key.
    pub fn normalized_hostname(&self) -> &str {
        normalize_hostname(&self.hostname)
    }

    /// Case-insensitive substring match against username or normalized
    /// hostname. An empty filter matches every record.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.username.to_lowercase().contains(&needle)
            || self.normalized_hostname().to_lowercase().contains(&needle)
    }

    /// Last-used instant, for detail views and debugging output.
    pub fn last_used_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_used_at_ms)
    }
}
