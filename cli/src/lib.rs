//! Memo CLI library
//!
//! Command glue and terminal collaborators for the `memo` binary; the storage
//! and retrieval core lives in `memo-store`.

pub mod commands;
pub mod ui;

pub use ui::TermUi;
