//! # Search & Filter Engine
//!
//! Pure recomputation over the notice collection: no side effects, no
//! stored state. The controller calls this whenever the collection, the
//! query, or the active category changes.

use crate::models::Notice;
use crate::seed::ALL_CATEGORIES;

/// Maps (notices, query, active category) to an ordered, filtered view.
///
/// Text match is a case-insensitive substring check against title OR
/// content; the empty query matches everything. The [`ALL_CATEGORIES`]
/// sentinel matches every category; any other value requires exact
/// equality. Both conditions must hold. Output is sorted newest first;
/// ties keep their input order. The input collection is never mutated.
pub fn filter_notices(notices: &[Notice], query: &str, active_category: &str) -> Vec<Notice> {
    let needle = query.to_lowercase();
    let mut matched: Vec<Notice> = notices
        .iter()
        .filter(|n| {
            let matches_search = needle.is_empty()
                || n.title.to_lowercase().contains(&needle)
                || n.content.to_lowercase().contains(&needle);
            let matches_category =
                active_category == ALL_CATEGORIES || n.category == active_category;
            matches_search && matches_category
        })
        .cloned()
        .collect();
    // Stable sort: equal timestamps keep their input order.
    matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matched
}
