//! Line-based unified diff
//!
//! Renders the old-vs-new comparison shown before an edit is committed.
//! Classic LCS over lines with three lines of context per hunk; memo contents
//! are small, so the quadratic table is fine.

/// Lines of unchanged context around each hunk
const CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Delete,
    Insert,
}

/// Produce a unified diff between two texts
///
/// Returns an empty string when the texts are line-identical.
pub fn unified(old: &str, new: &str) -> String {
    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();
    let ops = diff_ops(&a, &b);

    if ops.iter().all(|(op, _, _)| *op == Op::Equal) {
        return String::new();
    }

    // Old/new line positions before each op, for hunk headers.
    let mut pre_old = Vec::with_capacity(ops.len() + 1);
    let mut pre_new = Vec::with_capacity(ops.len() + 1);
    let (mut oi, mut ni) = (0usize, 0usize);
    for (op, _, _) in &ops {
        pre_old.push(oi);
        pre_new.push(ni);
        match op {
            Op::Equal => {
                oi += 1;
                ni += 1;
            }
            Op::Delete => oi += 1,
            Op::Insert => ni += 1,
        }
    }
    pre_old.push(oi);
    pre_new.push(ni);

    let mut out = String::from("--- original\n+++ new\n");
    let mut i = 0;
    while i < ops.len() {
        if ops[i].0 == Op::Equal {
            i += 1;
            continue;
        }

        // Grow the hunk while further changes fall within merged context.
        let start = i.saturating_sub(CONTEXT);
        let mut last_change = i;
        let mut j = i;
        while j < ops.len() {
            if ops[j].0 != Op::Equal {
                last_change = j;
            } else if j - last_change > 2 * CONTEXT {
                break;
            }
            j += 1;
        }
        let stop = (last_change + CONTEXT + 1).min(ops.len());

        let old_count = pre_old[stop] - pre_old[start];
        let new_count = pre_new[stop] - pre_new[start];
        out.push_str(&format!(
            "@@ -{} +{} @@\n",
            hunk_range(pre_old[start], old_count),
            hunk_range(pre_new[start], new_count),
        ));

        for (op, ai, bi) in &ops[start..stop] {
            match op {
                Op::Equal => {
                    out.push(' ');
                    out.push_str(a[*ai]);
                }
                Op::Delete => {
                    out.push('-');
                    out.push_str(a[*ai]);
                }
                Op::Insert => {
                    out.push('+');
                    out.push_str(b[*bi]);
                }
            }
            out.push('\n');
        }

        i = stop;
    }
    out
}

/// Unified hunk range: `start,count` with 1-based start, bare start when the
/// count is one, and the 0-based anchor when the count is zero
fn hunk_range(start: usize, count: usize) -> String {
    match count {
        0 => format!("{},0", start),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, count),
    }
}

/// LCS edit script as (op, old index, new index) triples
fn diff_ops<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<(Op, usize, usize)> {
    let n = a.len();
    let m = b.len();
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut ops = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push((Op::Equal, i, j));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            ops.push((Op::Delete, i, j));
            i += 1;
        } else {
            ops.push((Op::Insert, i, j));
            j += 1;
        }
    }
    while i < n {
        ops.push((Op::Delete, i, j));
        i += 1;
    }
    while j < m {
        ops.push((Op::Insert, i, j));
        j += 1;
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_empty_diff() {
        assert_eq!(unified("a\nb\n", "a\nb\n"), "");
        assert_eq!(unified("", ""), "");
    }

    #[test]
    fn test_single_line_replacement() {
        let out = unified("milk\neggs", "milk\nbread");
        assert!(out.starts_with("--- original\n+++ new\n"));
        assert!(out.contains("-eggs\n"));
        assert!(out.contains("+bread\n"));
        assert!(out.contains(" milk\n"));
    }

    #[test]
    fn test_pure_insertion() {
        let out = unified("a", "a\nb");
        assert!(out.contains("+b\n"));
        assert!(!out.contains("-a\n"));
    }

    #[test]
    fn test_distant_changes_get_separate_hunks() {
        let old: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();
        let mut new = old.clone();
        new[1] = "changed early".to_string();
        new[28] = "changed late".to_string();
        let out = unified(&old.join("\n"), &new.join("\n"));
        assert_eq!(out.matches("@@ -").count(), 2);
    }

    #[test]
    fn test_nearby_changes_share_a_hunk() {
        let old = "a\nb\nc\nd\ne";
        let new = "a\nB\nc\nD\ne";
        let out = unified(old, new);
        assert_eq!(out.matches("@@ -").count(), 1);
        assert!(out.contains("-b\n"));
        assert!(out.contains("+B\n"));
        assert!(out.contains("-d\n"));
        assert!(out.contains("+D\n"));
    }

    #[test]
    fn test_hunk_header_counts() {
        let out = unified("a\nb\nc", "a\nx\nc");
        assert!(out.contains("@@ -1,3 +1,3 @@\n"));
    }
}
