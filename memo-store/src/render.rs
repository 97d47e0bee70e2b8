//! Retrieval rendering pipeline
//!
//! Turns a (filtered) memo collection into terminal output. Two modes:
//!
//! - plain: one tab-separated record per memo, newlines in content escaped,
//!   for piping into other tools;
//! - table: fixed-width id column plus title/content/labels columns sized to
//!   the terminal width, word-wrapped at whitespace, sorted by full digest.
//!
//! A width of `0` means "no terminal width available" and forces plain mode.

use std::collections::BTreeMap;

use crate::ident::{MemoId, SHORT_ID_LEN};
use crate::memo::Memo;

/// Width of the id column ("HASH" plus padding to eight hex chars)
const ID_WIDTH: usize = SHORT_ID_LEN;
/// Spaces between columns
const GUTTER: usize = 4;
/// Id column plus three gutters
const FIXED_WIDTH: usize = ID_WIDTH + 3 * GUTTER;

/// Column widths for the formatted table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    title: usize,
    content: usize,
    labels: usize,
}

/// Render a memo collection for display
pub fn render(memos: &BTreeMap<MemoId, Memo>, width: usize, no_format: bool) -> String {
    if no_format || width == 0 {
        render_plain(memos)
    } else {
        render_table(memos, width)
    }
}

/// One tab-separated line per memo: short id, title, escaped content, labels
fn render_plain(memos: &BTreeMap<MemoId, Memo>) -> String {
    let mut out = String::new();
    for (id, memo) in memos {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            id.short(),
            memo.title,
            memo.content.replace('\n', "\\n"),
            memo.labels.join(", "),
        ));
    }
    out
}

/// Header plus one wrapped row per memo, sorted by full digest
fn render_table(memos: &BTreeMap<MemoId, Memo>, width: usize) -> String {
    let layout = layout_for(memos, width);

    let header = Memo {
        title: "TITLE".to_string(),
        content: "CONTENT".to_string(),
        labels: vec!["LABELS".to_string()],
    };

    let mut out = String::new();
    render_row(&mut out, "HASH", &header, layout);
    out.push('\n');

    // BTreeMap iteration is already lexicographic on the full digest, the
    // one guaranteed display ordering.
    for (id, memo) in memos {
        render_row(&mut out, id.short(), memo, layout);
        out.push('\n');
    }
    out
}

/// Compute column widths so no fully-padded line exceeds the terminal width
///
/// The title column gets at most a third of the usable width, content takes
/// what its longest line needs, and any surplus is handed to labels.
fn layout_for(memos: &BTreeMap<MemoId, Memo>, width: usize) -> Layout {
    let mut max_title = "TITLE".len();
    let mut max_content = "CONTENT".len();
    let mut max_label = "LABELS".len();
    for memo in memos.values() {
        max_title = max_title.max(memo.title.len());
        max_content = max_content.max(longest_line(&memo.content));
        for label in &memo.labels {
            max_label = max_label.max(label.len());
        }
    }

    // One column of right-side padding stays unused.
    let usable = width.saturating_sub(FIXED_WIDTH + 1);
    let title = max_title
        .min((width.saturating_sub(FIXED_WIDTH) / 3).max(1))
        .max(1);
    let content = max_content
        .min(usable.saturating_sub(title + max_label).max(1))
        .max(1);
    let labels = usable.saturating_sub(title + content).max(1);

    Layout {
        title,
        content,
        labels,
    }
}

/// Render one memo as a set of aligned lines
///
/// Continuation lines leave the id column blank.
fn render_row(out: &mut String, id_cell: &str, memo: &Memo, layout: Layout) {
    let titles = wrap(&memo.title, layout.title);
    let contents = wrap(&memo.content, layout.content);
    let labels = wrap(&memo.labels.join(", "), layout.labels);
    let lines = titles.len().max(contents.len()).max(labels.len());

    for i in 0..lines {
        if i == 0 {
            out.push_str(&format!("{:<width$}", id_cell, width = ID_WIDTH));
        } else {
            out.push_str(&" ".repeat(ID_WIDTH));
        }
        out.push_str(&" ".repeat(GUTTER));
        push_cell(out, &titles, i, layout.title);
        out.push_str(&" ".repeat(GUTTER));
        push_cell(out, &contents, i, layout.content);
        out.push_str(&" ".repeat(GUTTER));
        push_cell(out, &labels, i, layout.labels);
        out.push('\n');
    }
}

fn push_cell(out: &mut String, chunks: &[String], i: usize, width: usize) {
    match chunks.get(i) {
        Some(chunk) => out.push_str(&format!("{:<width$}", chunk)),
        None => out.push_str(&" ".repeat(width)),
    }
}

/// Word-wrap text into lines of at most `width` characters
///
/// Wraps at spaces and preserves existing line breaks. A single word longer
/// than the width is not split; it overflows its column.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    for line in text.split('\n') {
        let mut current = String::new();
        for word in line.split(' ') {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() > width {
                chunks.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current.push(' ');
                current.push_str(word);
            }
        }
        chunks.push(current);
    }
    chunks
}

fn longest_line(text: &str) -> usize {
    text.split('\n').map(str::len).max().unwrap_or(0)
}
