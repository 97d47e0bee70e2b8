//! Substring search over a loaded memo collection
//!
//! Case-insensitive containment over titles and/or contents. No ranking;
//! results keep the collection's digest ordering.

use std::collections::BTreeMap;

use crate::ident::MemoId;
use crate::memo::Memo;

/// Which memo fields a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Match either field
    #[default]
    All,
    /// Titles only
    Title,
    /// Contents only
    Content,
}

/// Keep memos whose selected fields contain `term` (case-insensitive)
pub fn search(
    memos: BTreeMap<MemoId, Memo>,
    term: &str,
    scope: SearchScope,
) -> BTreeMap<MemoId, Memo> {
    let needle = term.to_lowercase();
    memos
        .into_iter()
        .filter(|(_, memo)| {
            let title = matches!(scope, SearchScope::All | SearchScope::Title)
                && memo.title.to_lowercase().contains(&needle);
            let content = matches!(scope, SearchScope::All | SearchScope::Content)
                && memo.content.to_lowercase().contains(&needle);
            title || content
        })
        .collect()
}
