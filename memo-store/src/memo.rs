//! The memo record
//!
//! A memo is a title, free-form multi-line content, and an ordered list of
//! labels. Each memo is exclusively owned by its on-disk JSON file; in-memory
//! values are transient copies loaded for the duration of one invocation.

use serde::{Deserialize, Serialize};

use crate::ident::{filename_for, MemoId};

/// A single memo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// User-chosen title; uniqueness is not enforced
    pub title: String,
    /// Arbitrary multi-line text; may be empty
    pub content: String,
    /// Free-form labels in insertion order
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Memo {
    /// Create a memo with no labels
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            labels: Vec::new(),
        }
    }

    /// Storage filename derived from the title
    pub fn filename(&self) -> String {
        filename_for(&self.title)
    }

    /// Identifier derived from the storage filename
    pub fn id(&self) -> MemoId {
        MemoId::from_filename(&self.filename())
    }

    /// Append a label unless it is already present
    ///
    /// Returns whether the record changed.
    pub fn add_label(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.labels.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Remove the first occurrence of a label
    ///
    /// Absent labels are a no-op. Returns whether the record changed, so
    /// callers can skip the redundant save.
    pub fn remove_label(&mut self, label: &str) -> bool {
        match self.labels.iter().position(|l| l == label) {
            Some(idx) => {
                self.labels.remove(idx);
                true
            }
            None => false,
        }
    }
}
