//! Line diff engine built on a longest-common-subsequence table.
//! Classifies every aligned line as added, removed or unchanged.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Comparison-only normalization applied to both lines before equality.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationPolicy {
    /// Collapse whitespace runs to a single space and trim both ends
    pub ignore_whitespace: bool,
    /// Lower-case the line
    pub ignore_case: bool,
}

impl NormalizationPolicy {
    pub fn new(ignore_whitespace: bool, ignore_case: bool) -> Self {
        Self {
            ignore_whitespace,
            ignore_case,
        }
    }

    /// Returns the key a line is compared by. Borrows when no option is set.
    pub fn key<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut key = Cow::Borrowed(line);
        if self.ignore_whitespace {
            key = Cow::Owned(
                line.split(is_whitespace)
                    .filter(|word| !word.is_empty())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        if self.ignore_case {
            key = Cow::Owned(key.to_lowercase());
        }
        key
    }
}

// Browser `\s`: adds U+FEFF to `char::is_whitespace` and drops U+0085.
fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Dense LCS length table, `(m + 1) x (n + 1)` cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl AlignmentTable {
    /// Cells needed for documents of `left` and `right` lines, None on overflow.
    pub fn cell_count(left: usize, right: usize) -> Option<usize> {
        left.checked_add(1)?.checked_mul(right.checked_add(1)?)
    }

    /// Builds the table bottom-up over already-normalized keys.
    ///
    /// # Panics
    /// If the cell count overflows `usize`, see [`AlignmentTable::cell_count`].
    pub fn build<L, R>(left: &[L], right: &[R]) -> Self
    where
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let Some(len) = Self::cell_count(left.len(), right.len()) else {
            panic!(
                "alignment table for {} x {} lines overflows usize",
                left.len(),
                right.len()
            );
        };
        let rows = left.len() + 1;
        let cols = right.len() + 1;
        let mut cells = vec![0; len];

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if left[i - 1].as_ref() == right[j - 1].as_ref() {
                    cells[(i - 1) * cols + j - 1] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + j - 1])
                };
            }
        }

        Self { cells, rows, cols }
    }

    /// LCS length of the first `i` left lines and the first `j` right lines.
    ///
    /// # Panics
    /// If `i >= rows()` or `j >= cols()`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    /// Number of rows, one more than the left line count
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, one more than the right line count
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest common subsequence of both documents
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Classification of an aligned line
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Line only present in the right document
    Added,
    /// Line only present in the left document
    Removed,
    /// Line present in both documents
    Unchanged,
}

/// Represents a single aligned line in the diff output
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    pub kind: DiffKind,
    /// Original line content; the left line for unchanged entries
    pub content: String,
    /// Line number in the left text (1-indexed), None for additions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_line: Option<usize>,
    /// Line number in the right text (1-indexed), None for removals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_line: Option<usize>,
}

impl DiffEntry {
    fn added(content: &str, right_line: usize) -> Self {
        Self {
            kind: DiffKind::Added,
            content: content.to_string(),
            left_line: None,
            right_line: Some(right_line),
        }
    }

    fn removed(content: &str, left_line: usize) -> Self {
        Self {
            kind: DiffKind::Removed,
            content: content.to_string(),
            left_line: Some(left_line),
            right_line: None,
        }
    }

    fn unchanged(content: &str, left_line: usize, right_line: usize) -> Self {
        Self {
            kind: DiffKind::Unchanged,
            content: content.to_string(),
            left_line: Some(left_line),
            right_line: Some(right_line),
        }
    }
}

/// Counts per classification
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub total: usize,
}

/// Ordered diff entries, top to bottom
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub entries: Vec<DiffEntry>,
}

impl DiffResult {
    /// Contents of the entries carrying a left line number, in order.
    pub fn left_lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.left_line.is_some())
            .map(|entry| entry.content.as_str())
    }

    /// Contents of the entries carrying a right line number, in order.
    ///
    /// Unchanged entries hold the left line, so under a normalization
    /// policy this reproduces the right document only up to that policy.
    pub fn right_lines(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|entry| entry.right_line.is_some())
            .map(|entry| entry.content.as_str())
    }

    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats {
            total: self.entries.len(),
            ..DiffStats::default()
        };
        for entry in &self.entries {
            match entry.kind {
                DiffKind::Added => stats.added += 1,
                DiffKind::Removed => stats.removed += 1,
                DiffKind::Unchanged => stats.unchanged += 1,
            }
        }
        stats
    }

    /// True when no line was added or removed
    pub fn is_identical(&self) -> bool {
        self.entries
            .iter()
            .all(|entry| entry.kind == DiffKind::Unchanged)
    }
}

/// Splits text on `'\n'`. Empty text yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Compute the line diff between two documents
///
/// # Arguments
/// * `left` - The original lines
/// * `right` - The modified lines
/// * `policy` - Normalization applied to both sides before comparing
///
/// # Returns
/// DiffResult whose left-numbered entries reproduce `left` and whose
/// right-numbered entries reproduce `right` under `policy`.
pub fn compute_diff<L, R>(left: &[L], right: &[R], policy: NormalizationPolicy) -> DiffResult
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let left_keys: Vec<Cow<'_, str>> = left.iter().map(|line| policy.key(line.as_ref())).collect();
    let right_keys: Vec<Cow<'_, str>> =
        right.iter().map(|line| policy.key(line.as_ref())).collect();
    let table = AlignmentTable::build(&left_keys, &right_keys);

    let mut entries = Vec::with_capacity(left.len() + right.len() - table.lcs_len());
    let mut i = left.len();
    let mut j = right.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && left_keys[i - 1] == right_keys[j - 1] {
            entries.push(DiffEntry::unchanged(left[i - 1].as_ref(), i, j));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            entries.push(DiffEntry::added(right[j - 1].as_ref(), j));
            j -= 1;
        } else {
            entries.push(DiffEntry::removed(left[i - 1].as_ref(), i));
            i -= 1;
        }
    }
    entries.reverse();

    tracing::debug!(
        left_lines = left.len(),
        right_lines = right.len(),
        unchanged = table.lcs_len(),
        "computed line diff"
    );

    DiffResult { entries }
}

/// Splits both texts into lines and diffs them
pub fn diff_texts(left: &str, right: &str, policy: NormalizationPolicy) -> DiffResult {
    compute_diff(&split_lines(left), &split_lines(right), policy)
}
