//! Command implementations
//!
//! Thin glue between the parsed CLI and the store: each function loads what
//! it needs, calls into `memo_store`, and prints the result. User-facing
//! error text is produced by the caller from the returned `StoreError`.

use std::collections::BTreeMap;

use memo_store::workflow::{self, AddOutcome, EditOutcome};
use memo_store::{labels, render, search};
use memo_store::{Memo, MemoId, MemoStore, Result, SearchScope, StoreError};

use crate::ui::{self, TermUi};

/// Load every memo, reporting unparseable files without aborting
fn load_all(store: &MemoStore) -> Result<BTreeMap<MemoId, Memo>> {
    let (memos, skipped) = store.list_with_skipped()?;
    for skip in &skipped {
        println!("Skipping memo file '{}': {}", skip.filename, skip.reason);
    }
    Ok(memos)
}

/// `memo add <TITLE> [CONTENT]`
pub fn add(store: &MemoStore, ui: &TermUi, title: &str, content: Option<String>) -> Result<()> {
    match workflow::add_memo(store, title, content, ui, ui)? {
        AddOutcome::Created(id) => println!("{}", id.short()),
        AddOutcome::EditExisting => edit(store, ui, title, None, false)?,
        AddOutcome::Declined => {}
    }
    Ok(())
}

/// `memo edit [-a|--accept] <IDENTIFIER> [CONTENT]`
pub fn edit(
    store: &MemoStore,
    ui: &TermUi,
    identifier: &str,
    content: Option<String>,
    accept: bool,
) -> Result<()> {
    match workflow::edit_memo(store, identifier, content, accept, ui, ui)? {
        EditOutcome::Saved(_) => {}
        EditOutcome::Scrapped => println!("Changes scrapped"),
    }
    Ok(())
}

/// `memo rm <IDENTIFIER>`
pub fn rm(store: &MemoStore, identifier: &str) -> Result<()> {
    let (_, memo) = store.resolve(identifier)?;
    store.delete(&memo)
}

/// `memo show [-n|--no-format] <IDENTIFIER>`
pub fn show(store: &MemoStore, identifier: &str, no_format: bool) -> Result<()> {
    let (id, memo) = store.resolve(identifier)?;
    let mut single = BTreeMap::new();
    single.insert(id, memo);
    print!("{}", render::render(&single, width_for(no_format), no_format));
    Ok(())
}

/// `memo ls [-n|--no-format] [-t|--tag <TAG>]...`
pub fn ls(store: &MemoStore, tags: &[String], no_format: bool) -> Result<()> {
    let memos = labels::filter(load_all(store)?, tags);
    print!("{}", render::render(&memos, width_for(no_format), no_format));
    Ok(())
}

/// `memo search [-t|--title | -c|--content] [-n|--no-format] <TERM>`
pub fn search(store: &MemoStore, term: &str, scope: SearchScope, no_format: bool) -> Result<()> {
    let memos = search::search(load_all(store)?, term, scope);
    print!("{}", render::render(&memos, width_for(no_format), no_format));
    Ok(())
}

/// `memo tag add <IDENTIFIER> <TAG>`
pub fn tag_add(store: &MemoStore, identifier: &str, tag: &str) -> Result<()> {
    let (_, mut memo) = store
        .load_by_id(identifier)?
        .ok_or_else(|| StoreError::not_found(identifier))?;
    if memo.add_label(tag) {
        store.save(&memo)?;
    }
    Ok(())
}

/// `memo tag rm <IDENTIFIER> <TAG>`
///
/// Removing an absent tag is a no-op; the redundant save is skipped.
pub fn tag_rm(store: &MemoStore, identifier: &str, tag: &str) -> Result<()> {
    let (_, mut memo) = store
        .load_by_id(identifier)?
        .ok_or_else(|| StoreError::not_found(identifier))?;
    if memo.remove_label(tag) {
        store.save(&memo)?;
    }
    Ok(())
}

/// `memo tag ls` / `memo tags`
pub fn tag_ls(store: &MemoStore) -> Result<()> {
    for label in labels::all_labels(&load_all(store)?) {
        println!("{}", label);
    }
    Ok(())
}

fn width_for(no_format: bool) -> usize {
    if no_format {
        0
    } else {
        ui::terminal_width()
    }
}
