//! End-to-end scenarios over a temporary store

use std::collections::BTreeMap;
use std::fs;

use tempfile::TempDir;

use memo_store::{labels, render, Memo, MemoId, MemoStore, StoreError};

fn store() -> (TempDir, MemoStore) {
    let tmp = TempDir::new().unwrap();
    let store = MemoStore::new(tmp.path());
    (tmp, store)
}

fn single(id: MemoId, memo: Memo) -> BTreeMap<MemoId, Memo> {
    let mut map = BTreeMap::new();
    map.insert(id, memo);
    map
}

#[test]
fn add_then_show_groceries_plain() {
    let (tmp, store) = store();
    let memo = Memo::new("Groceries", "milk\neggs");
    store.save(&memo).unwrap();

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);

    let (id, found) = store.resolve("Groceries").unwrap();
    let out = render::render(&single(id.clone(), found), 0, true);
    assert_eq!(out, format!("{}\tGroceries\tmilk\\neggs\t\n", id.short()));
    assert_eq!(id.short().len(), 8);
    assert!(id.short().chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn tag_filtered_listing() {
    let (_tmp, store) = store();
    let mut home = Memo::new("chores", "sweep");
    home.add_label("home");
    let mut work = Memo::new("standup", "notes");
    work.add_label("work");
    store.save(&home).unwrap();
    store.save(&work).unwrap();

    let filtered = labels::filter(store.list().unwrap(), &["home".to_string()]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.values().next().unwrap().title, "chores");

    let unfiltered = labels::filter(store.list().unwrap(), &[]);
    assert_eq!(unfiltered.len(), 2);
}

#[test]
fn rm_unknown_identifier_leaves_store_unchanged() {
    let (tmp, store) = store();
    store.save(&Memo::new("keep", "me")).unwrap();

    let err = store.resolve("cafebabe").unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn resolve_round_trips_saved_memos() {
    let (_tmp, store) = store();
    for title in ["Groceries", "Weekly Plan", "call mum"] {
        let mut memo = Memo::new(title, format!("content of {}", title));
        memo.add_label("test");
        let id = store.save(&memo).unwrap();
        let (resolved, found) = store.resolve(id.short()).unwrap();
        assert_eq!(resolved, id);
        assert_eq!(found, memo);
    }
}

#[test]
fn label_mutations_persist() {
    let (_tmp, store) = store();
    let id = store.save(&Memo::new("tagged", "")).unwrap();

    let (_, mut memo) = store.load_by_id(id.short()).unwrap().unwrap();
    assert!(memo.add_label("home"));
    store.save(&memo).unwrap();

    let (_, mut memo) = store.load_by_id(id.short()).unwrap().unwrap();
    assert_eq!(memo.labels, vec!["home"]);
    assert!(memo.remove_label("home"));
    store.save(&memo).unwrap();

    let (_, memo) = store.load_by_id(id.short()).unwrap().unwrap();
    assert!(memo.labels.is_empty());
}
