use serde::Deserialize;

use crate::diff::{AlignmentTable, NormalizationPolicy};
use crate::error::{DiffError, Side};

/// Default per-side line ceiling; the LCS table is `m * n` cells.
pub const DEFAULT_MAX_LINES: usize = 5000;

/// Default unchanged lines kept around each unified hunk
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Options accepted from the page. Every key is optional.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DiffOptions {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    pub context_lines: usize,
    /// Per-side line ceiling, 0 disables it
    pub max_lines: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            ignore_case: false,
            context_lines: DEFAULT_CONTEXT_LINES,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl DiffOptions {
    pub fn policy(&self) -> NormalizationPolicy {
        NormalizationPolicy::new(self.ignore_whitespace, self.ignore_case)
    }

    /// Rejects a document longer than `max_lines`.
    pub fn admit(&self, side: Side, lines: usize) -> Result<(), DiffError> {
        if self.max_lines != 0 && lines > self.max_lines {
            tracing::warn!(%side, lines, limit = self.max_lines, "diff input rejected");
            return Err(DiffError::InputTooLarge {
                side,
                lines,
                limit: self.max_lines,
            });
        }
        Ok(())
    }

    /// Rejects document pairs whose alignment table cannot be addressed,
    /// which only happens when `max_lines` is disabled.
    pub fn admit_table(&self, left: usize, right: usize) -> Result<(), DiffError> {
        if AlignmentTable::cell_count(left, right).is_none() {
            tracing::warn!(left, right, "diff table size overflows");
            return Err(DiffError::TableTooLarge { left, right });
        }
        Ok(())
    }
}
