//! Unified (git-style) rendering of a computed line diff.

use std::ops::Range;

use crate::diff::{DiffEntry, DiffKind, DiffResult};

/// Render a diff result in unified format
///
/// # Arguments
/// * `result` - A computed diff
/// * `old_name` - Name/label for the left text (e.g., "a/file.txt")
/// * `new_name` - Name/label for the right text (e.g., "b/file.txt")
/// * `context_lines` - Unchanged lines kept around each change
///
/// # Returns
/// The unified diff, or an empty string when nothing changed
pub fn render_unified(
    result: &DiffResult,
    old_name: &str,
    new_name: &str,
    context_lines: usize,
) -> String {
    let hunks = hunk_ranges(&result.entries, context_lines);
    if hunks.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str(&format!("--- {}\n", old_name));
    output.push_str(&format!("+++ {}\n", new_name));

    for range in hunks {
        let before = &result.entries[..range.start];
        let hunk = &result.entries[range];

        let (old_start, old_count) = side_span(before, hunk, |entry| entry.left_line);
        let (new_start, new_count) = side_span(before, hunk, |entry| entry.right_line);
        output.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            old_start, old_count, new_start, new_count
        ));

        for entry in hunk {
            output.push(match entry.kind {
                DiffKind::Unchanged => ' ',
                DiffKind::Added => '+',
                DiffKind::Removed => '-',
            });
            output.push_str(&entry.content);
            output.push('\n');
        }
    }

    output
}

/// Groups changed entries into hunks padded with context.
/// Windows that overlap or touch are merged into one hunk.
fn hunk_ranges(entries: &[DiffEntry], context_lines: usize) -> Vec<Range<usize>> {
    let mut hunks: Vec<Range<usize>> = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.kind == DiffKind::Unchanged {
            continue;
        }
        let start = idx.saturating_sub(context_lines);
        let end = (idx + 1 + context_lines).min(entries.len());
        match hunks.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => hunks.push(start..end),
        }
    }

    hunks
}

// A side contributing no lines is anchored at the line preceding the hunk.
fn side_span(
    before: &[DiffEntry],
    hunk: &[DiffEntry],
    line_of: impl Fn(&DiffEntry) -> Option<usize>,
) -> (usize, usize) {
    let preceding = before.iter().filter(|entry| line_of(entry).is_some()).count();
    let count = hunk.iter().filter(|entry| line_of(entry).is_some()).count();
    let start = if count == 0 { preceding } else { preceding + 1 };
    (start, count)
}
