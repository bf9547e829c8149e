use crate::constant::DEFAULT_MAX_TABLE_CELLS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error(
        "Diff table too large: {old_lines} x {new_lines} tokens needs {cells} cells (limit {limit})"
    )]
    TableTooLarge {
        old_lines: usize,
        new_lines: usize,
        cells: usize,
        limit: usize,
    },
}

/// Upper bound on the LCS table the checked differencers may allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLimits {
    pub max_table_cells: usize,
}

impl DiffLimits {
    pub fn new(max_table_cells: usize) -> Self {
        Self { max_table_cells }
    }

    pub fn unlimited() -> Self {
        Self {
            max_table_cells: usize::MAX,
        }
    }

    pub(crate) fn check(
        &self,
        old_lines: usize,
        new_lines: usize,
        cells: usize,
    ) -> Result<(), DiffError> {
        if cells > self.max_table_cells {
            tracing::warn!(
                old_lines,
                new_lines,
                cells,
                limit = self.max_table_cells,
                "Refusing to build diff table"
            );
            return Err(DiffError::TableTooLarge {
                old_lines,
                new_lines,
                cells,
                limit: self.max_table_cells,
            });
        }
        Ok(())
    }
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TABLE_CELLS)
    }
}
