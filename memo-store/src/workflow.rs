//! Create and edit workflows
//!
//! The interactive collaborators (external editor, y/n prompt) are injected
//! as traits so the flows can be driven by stubs in tests without spawning a
//! subprocess or touching stdin.

use crate::diff;
use crate::error::{Result, StoreError};
use crate::ident::MemoId;
use crate::memo::Memo;
use crate::store::MemoStore;

/// Acquires memo content from the user, seeded with the current text
pub trait ContentEditor {
    fn acquire(&self, seed: &str) -> Result<String>;
}

/// Asks the user a question with a bounded set of acceptable answers
///
/// Implementations re-prompt with `retry` until an accepted answer arrives;
/// the loop is uncapped, matching the interactive contract.
pub trait Prompter {
    fn confirm(&self, prompt: &str, retry: &str, accepted: &[&str]) -> Result<String>;
}

/// Outcome of the add workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new memo was written; carries its identifier
    Created(MemoId),
    /// A memo with this title already exists and the user chose to edit it
    EditExisting,
    /// A memo with this title already exists and the user declined to edit
    Declined,
}

/// Outcome of the edit workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// New content was committed; carries the identifier of the saved memo
    Saved(MemoId),
    /// The user rejected the diff; nothing was written
    Scrapped,
}

/// Create a memo, prompting when the title is already taken
///
/// Duplicate titles are flagged, not rejected: the user may switch to editing
/// the existing memo instead. Content comes from the argument when given,
/// otherwise from the editor seeded with an empty buffer.
pub fn add_memo(
    store: &MemoStore,
    title: &str,
    content: Option<String>,
    editor: &dyn ContentEditor,
    prompter: &dyn Prompter,
) -> Result<AddOutcome> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }

    let memos = store.list()?;
    if memos.values().any(|memo| memo.title == title) {
        let response = prompter.confirm(
            &format!("Memo '{}' already exists.\nEdit? (y/n) ", title),
            "Invalid response. Try again: ",
            &["y", "n"],
        )?;
        return Ok(if response == "y" {
            AddOutcome::EditExisting
        } else {
            AddOutcome::Declined
        });
    }

    let content = match content {
        Some(content) => content,
        None => editor.acquire("")?,
    };
    let id = store.save(&Memo::new(title, content))?;
    Ok(AddOutcome::Created(id))
}

/// Edit a memo's content: resolve, acquire, confirm, commit
///
/// With `auto_accept` the diff preview and confirmation are skipped. A `n`
/// response leaves the stored memo untouched.
pub fn edit_memo(
    store: &MemoStore,
    identifier: &str,
    content: Option<String>,
    auto_accept: bool,
    editor: &dyn ContentEditor,
    prompter: &dyn Prompter,
) -> Result<EditOutcome> {
    let (_, mut memo) = store.resolve(identifier)?;

    let new_content = match content {
        Some(content) => content,
        None => editor.acquire(&memo.content)?,
    };

    if !auto_accept {
        let preview = diff::unified(&memo.content, &new_content);
        let response = prompter.confirm(
            &format!("{}\nChanges:\nAccept changes? (y/n) ", preview),
            "Try again: ",
            &["y", "n"],
        )?;
        if response == "n" {
            return Ok(EditOutcome::Scrapped);
        }
    }

    memo.content = new_content;
    let id = store.save(&memo)?;
    Ok(EditOutcome::Saved(id))
}
