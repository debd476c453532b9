use crate::list::row::DisplayRow;
use crate::list::sort::SortOrder;
use crate::sync::SyncStatus;
use crate::vault::LoginRecord;

/// Combined value of the four upstream signals at one instant.
///
/// Exists only transiently inside the pipeline. Derived equality (tag-only
/// for `sync_status`) is the deduplication key that suppresses redundant
/// downstream pushes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSnapshot {
    pub logins: Vec<LoginRecord>,
    pub filter_text: String,
    pub sort_order: SortOrder,
    pub sync_status: SyncStatus,
}

/// Derive the render-ready row sequence from a snapshot.
///
/// While the first sync is still pending (`Syncing`/`ReadyToSync` with no
/// logins yet) the output is the fixed loading shape, regardless of filter
/// and sort. Otherwise records are filtered, sorted, mapped to entry rows,
/// and prefixed with the search header as a single section.
pub fn project(snapshot: &ProjectionSnapshot) -> Vec<DisplayRow> {
    if snapshot.sync_status.is_loading() && snapshot.logins.is_empty() {
        return vec![DisplayRow::SearchHeader, DisplayRow::Placeholder];
    }

    let mut records: Vec<&LoginRecord> = snapshot
        .logins
        .iter()
        .filter(|r| r.matches_filter(&snapshot.filter_text))
        .collect();

    // Both sorts are stable; records with equal keys keep their upstream order.
    match snapshot.sort_order {
        SortOrder::Alphabetical => {
            records.sort_by_key(|r| r.normalized_hostname().to_lowercase());
        }
        SortOrder::RecentlyUsed => {
            records.sort_by_key(|r| std::cmp::Reverse(r.last_used_at_ms));
        }
    }

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(DisplayRow::SearchHeader);
    for record in records {
        rows.push(DisplayRow::entry(
            record.normalized_hostname(),
            &record.username,
            record.id.clone(),
        ));
    }
    rows
}

/// Shared predicate for the sort control and list interaction signals.
pub fn controls_enabled(status: &SyncStatus, logins_empty: bool) -> bool {
    !status.is_syncing() && !logins_empty
}
