use serde::{Deserialize, Serialize};

/// Sort criterion for the login list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending by normalized hostname.
    Alphabetical,

    /// Descending by last-used time.
    RecentlyUsed,
}

impl SortOrder {
    /// Human-readable label for the sort control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Alphabetical => "A–Z",
            Self::RecentlyUsed => "Recent",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Alphabetical
    }
}
