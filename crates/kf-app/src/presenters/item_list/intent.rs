use serde::{Deserialize, Serialize};

use kf_core::ids::LoginId;
use kf_core::list::SortOrder;

/// User intents accepted by the item list presenter, in the shape the view
/// bridge delivers them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum ListIntent {
    /// Replace the free-text filter; empty text clears it.
    SetFilter(String),

    /// Switch the sort criterion.
    SetSort(SortOrder),

    /// Open the detail screen for a row. No-op if the id is not in the
    /// current list.
    SelectItem(LoginId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_deserialize_from_bridge_payloads() {
        let intent: ListIntent =
            serde_json::from_str(r#"{"intent":"set_filter","value":"meow"}"#).unwrap();
        assert_eq!(intent, ListIntent::SetFilter("meow".to_string()));

        let intent: ListIntent =
            serde_json::from_str(r#"{"intent":"set_sort","value":"recently_used"}"#).unwrap();
        assert_eq!(intent, ListIntent::SetSort(SortOrder::RecentlyUsed));

        let intent: ListIntent =
            serde_json::from_str(r#"{"intent":"select_item","value":"login-1"}"#).unwrap();
        assert_eq!(intent, ListIntent::SelectItem(LoginId::from("login-1")));
    }
}
