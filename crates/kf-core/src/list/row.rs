use serde::{Deserialize, Serialize};

use crate::ids::LoginId;

/// Username shown for records the engine stored without one.
pub const MISSING_USERNAME_LABEL: &str = "(no username)";

/// A render-ready row of the login list.
///
/// Rows are recomputed on every upstream change and never mutated in place.
/// The first row is always `SearchHeader`; `Placeholder` only ever appears as
/// the single row after it, while the first sync is still pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayRow {
    SearchHeader,
    Placeholder,
    Entry {
        title: String,
        username: String,
        id: LoginId,
    },
}

impl DisplayRow {
    /// Build an entry row, substituting the placeholder label for an empty
    /// username.
    pub fn entry(title: impl Into<String>, username: &str, id: LoginId) -> Self {
        let username = if username.is_empty() {
            MISSING_USERNAME_LABEL.to_string()
        } else {
            username.to_string()
        };
        Self::Entry {
            title: title.into(),
            username,
            id,
        }
    }
}
