//! Memo storage and retrieval core
//!
//! Persistence and identity model for a personal command-line memo manager:
//! one pretty-printed JSON file per memo in a configured directory, addressed
//! by the SHA-256 digest of the slugified title (short form: first eight hex
//! characters) or by exact title.
//!
//! ## Example
//!
//! ```ignore
//! use memo_store::{Memo, MemoStore};
//!
//! let store = MemoStore::new(config.saves_dir.clone());
//! let mut memo = Memo::new("Groceries", "milk\neggs");
//! memo.add_label("home");
//! let id = store.save(&memo)?;
//!
//! let (id, found) = store.resolve("Groceries")?;
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod ident;
pub mod labels;
pub mod memo;
pub mod render;
pub mod search;
pub mod store;
pub mod workflow;

// Re-exports for convenience
pub use config::Config;
pub use error::{Result, StoreError};
pub use ident::{filename_for, MemoId, SHORT_ID_LEN};
pub use memo::Memo;
pub use search::SearchScope;
pub use store::{MemoStore, SkippedFile};
pub use workflow::{AddOutcome, ContentEditor, EditOutcome, Prompter};
