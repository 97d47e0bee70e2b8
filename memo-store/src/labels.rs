//! Label index
//!
//! In-memory derivation of the global label set and of label-filtered subsets
//! from a loaded memo collection. Filtering is any-match set intersection.

use std::collections::{BTreeMap, BTreeSet};

use crate::ident::MemoId;
use crate::memo::Memo;

/// Union of every memo's labels, iterated in sorted order
pub fn all_labels(memos: &BTreeMap<MemoId, Memo>) -> BTreeSet<String> {
    memos
        .values()
        .flat_map(|memo| memo.labels.iter().cloned())
        .collect()
}

/// Keep memos whose labels intersect `wanted`
///
/// An empty `wanted` list is the identity filter: everything is kept, not
/// nothing.
pub fn filter(memos: BTreeMap<MemoId, Memo>, wanted: &[String]) -> BTreeMap<MemoId, Memo> {
    if wanted.is_empty() {
        return memos;
    }
    memos
        .into_iter()
        .filter(|(_, memo)| memo.labels.iter().any(|l| wanted.contains(l)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> BTreeMap<MemoId, Memo> {
        let mut memos = BTreeMap::new();
        let mut home = Memo::new("chores", "sweep");
        home.add_label("home");
        let mut work = Memo::new("standup", "notes");
        work.add_label("work");
        work.add_label("daily");
        memos.insert(home.id(), home);
        memos.insert(work.id(), work);
        memos
    }

    #[test]
    fn test_all_labels_sorted_union() {
        let labels: Vec<String> = all_labels(&collection()).into_iter().collect();
        assert_eq!(labels, vec!["daily", "home", "work"]);
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let memos = collection();
        let filtered = filter(memos.clone(), &[]);
        assert_eq!(filtered, memos);
    }

    #[test]
    fn test_filter_any_match() {
        let filtered = filter(collection(), &["home".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.values().next().unwrap().title, "chores");

        let either = filter(
            collection(),
            &["home".to_string(), "daily".to_string()],
        );
        assert_eq!(either.len(), 2);
    }

    #[test]
    fn test_filter_unknown_label_keeps_nothing() {
        let filtered = filter(collection(), &["absent".to_string()]);
        assert!(filtered.is_empty());
    }
}
