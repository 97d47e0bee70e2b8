//! Filesystem-backed memo store
//!
//! One JSON file per memo inside a configured directory; the filename is the
//! slugified title and the identifier is the digest of that filename. The
//! store holds no state beyond the directory path and assumes it is the sole
//! writer for the duration of one invocation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::ident::MemoId;
use crate::memo::Memo;

/// A directory entry that could not be loaded as a memo record
///
/// Unparseable entries are skipped, not fatal: the rest of the enumeration
/// proceeds. An unreadable directory, by contrast, fails the whole operation.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Filename relative to the store directory
    pub filename: String,
    /// Human-readable parse or read error
    pub reason: String,
}

/// Filesystem-backed store for memo records
pub struct MemoStore {
    dir: PathBuf,
}

impl MemoStore {
    /// Create a store over the given directory
    ///
    /// The directory is expected to exist; config setup creates it before any
    /// store operation runs.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load every memo in the store, keyed by full identifier
    pub fn list(&self) -> Result<BTreeMap<MemoId, Memo>> {
        self.list_with_skipped().map(|(memos, _)| memos)
    }

    /// Load every memo, also reporting entries that failed to parse
    pub fn list_with_skipped(&self) -> Result<(BTreeMap<MemoId, Memo>, Vec<SkippedFile>)> {
        let mut memos = BTreeMap::new();
        let mut skipped = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let filename = entry.file_name().to_string_lossy().into_owned();

            match self.load_file(&entry.path()) {
                Ok(memo) => {
                    memos.insert(MemoId::from_filename(&filename), memo);
                }
                Err(e) => {
                    log::warn!("Skipping memo file '{}': {}", filename, e);
                    skipped.push(SkippedFile {
                        filename,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok((memos, skipped))
    }

    /// Resolve a user-supplied identifier (short id prefix or exact title)
    ///
    /// Zero matches is a `NotFound` data error. More than one match is an
    /// `Ambiguous` data error asking for a more specific identifier; the
    /// original directory-order "first match wins" is deliberately not kept.
    pub fn resolve(&self, identifier: &str) -> Result<(MemoId, Memo)> {
        let memos = self.list()?;
        let mut matches: Vec<(MemoId, Memo)> = memos
            .into_iter()
            .filter(|(id, memo)| id.matches_short(identifier) || memo.title == identifier)
            .collect();

        match matches.len() {
            0 => Err(StoreError::not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(StoreError::ambiguous(identifier, n)),
        }
    }

    /// Look up a memo by short identifier only (no title fallback)
    ///
    /// Used by label mutation. Returns `None` when nothing matches; an
    /// ambiguous prefix is still an error.
    pub fn load_by_id(&self, short_id: &str) -> Result<Option<(MemoId, Memo)>> {
        let memos = self.list()?;
        let mut matches: Vec<(MemoId, Memo)> = memos
            .into_iter()
            .filter(|(id, _)| id.matches_short(short_id))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches.remove(0))),
            n => Err(StoreError::ambiguous(short_id, n)),
        }
    }

    /// Write a memo to its slug filename, overwriting any existing file
    ///
    /// Returns the identifier of the written file. Note that saving a memo
    /// whose title changed writes a new file and leaves the old one behind;
    /// there is no rename operation.
    pub fn save(&self, memo: &Memo) -> Result<MemoId> {
        if memo.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let filename = memo.filename();
        let json = serde_json::to_string_pretty(memo)?;
        fs::write(self.dir.join(&filename), json)?;
        log::debug!("Saved memo '{}' as '{}'", memo.title, filename);
        Ok(MemoId::from_filename(&filename))
    }

    /// Delete the file backing a memo
    pub fn delete(&self, memo: &Memo) -> Result<()> {
        let filename = memo.filename();
        fs::remove_file(self.dir.join(&filename))?;
        log::debug!("Deleted memo file '{}'", filename);
        Ok(())
    }

    fn load_file(&self, path: &Path) -> Result<Memo> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
