//! Memo identifiers and filename derivation
//!
//! A memo's identity is the SHA-256 digest of its storage filename, rendered
//! as lowercase hex. The digest is computed on load and never stored: the same
//! filename always hashes to the same identifier. Users address memos by the
//! first eight hex characters (the "short id") or by exact title.

use sha2::{Digest, Sha256};

/// Number of hex characters shown to (and accepted from) the user
pub const SHORT_ID_LEN: usize = 8;

/// Full identifier for a stored memo
///
/// Ordering is lexicographic on the hex digest, which is the one guaranteed
/// display order for listings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoId(String);

impl MemoId {
    /// Derive the identifier for a storage filename
    pub fn from_filename(filename: &str) -> Self {
        let digest = Sha256::digest(filename.as_bytes());
        Self(hex::encode(digest))
    }

    /// Full lowercase-hex digest
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// First eight hex characters, the user-facing form
    pub fn short(&self) -> &str {
        &self.0[..SHORT_ID_LEN]
    }

    /// Whether a user-supplied identifier matches this id
    ///
    /// Any stored memo whose full digest starts with the supplied string is a
    /// candidate; prefixes longer than eight characters narrow collisions.
    pub fn matches_short(&self, identifier: &str) -> bool {
        !identifier.is_empty() && self.0.starts_with(identifier)
    }
}

impl std::fmt::Display for MemoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short())
    }
}

/// Derive the storage filename for a memo title
///
/// Lowercases the title and replaces spaces, path separators, and other
/// filesystem-hostile characters with underscores. The transform is
/// deterministic but lossy: distinct titles can slugify to the same filename
/// and will silently alias to one file. Known limitation, not guarded against.
pub fn filename_for(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | '?' | '%' | '*' | ':' | '|' | '"' | '<' | '>' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_stable_for_same_filename() {
        let a = MemoId::from_filename("groceries");
        let b = MemoId::from_filename("groceries");
        assert_eq!(a, b);
        assert_ne!(a, MemoId::from_filename("chores"));
    }

    #[test]
    fn test_short_id_is_prefix_of_full() {
        let id = MemoId::from_filename("groceries");
        assert_eq!(id.short().len(), SHORT_ID_LEN);
        assert!(id.as_hex().starts_with(id.short()));
        assert!(id.as_hex().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_matches_short_accepts_prefixes() {
        let id = MemoId::from_filename("groceries");
        assert!(id.matches_short(id.short()));
        assert!(id.matches_short(&id.as_hex()[..12]));
        assert!(id.matches_short(id.as_hex()));
        assert!(!id.matches_short(""));
        assert!(!id.matches_short("zzzzzzzz"));
    }

    #[test]
    fn test_filename_for_slugifies() {
        assert_eq!(filename_for("Weekly Groceries"), "weekly_groceries");
        assert_eq!(filename_for("a/b:c*d"), "a_b_c_d");
        assert_eq!(filename_for("  Trimmed  "), "trimmed");
    }

    #[test]
    fn test_filename_for_is_lossy() {
        // Distinct titles aliasing to one file is accepted behavior.
        assert_eq!(filename_for("My Memo"), filename_for("my memo"));
        assert_eq!(filename_for("a b"), filename_for("a/b"));
    }
}
