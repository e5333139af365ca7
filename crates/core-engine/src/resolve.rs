use crate::error::{ColumnNotFoundSnafu, EmptyResultSnafu, EngineResult};
use crate::models::ResultSet;
use snafu::OptionExt;

impl ResultSet {
    /// Locates a cell by column name, with a positional fallback.
    ///
    /// Administrative `show` commands do not guarantee stable column ordering
    /// or count across server versions, so a name match in `column_list`
    /// always wins over position; `fallback_from_end` is only consulted when
    /// the name cannot be resolved (no `column_list`, or the name is missing
    /// from it). Duplicate names resolve to the leftmost match.
    pub fn resolve_cell(
        &self,
        row_index: usize,
        column: &str,
        fallback_from_end: usize,
    ) -> EngineResult<&str> {
        let row = self.rows.get(row_index).context(EmptyResultSnafu {
            sql: self.full_sql.clone(),
        })?;

        if let Some(columns) = self.column_list.as_deref() {
            if let Some(index) = columns.iter().position(|name| name == column) {
                return row
                    .get(index)
                    .map(String::as_str)
                    .context(ColumnNotFoundSnafu {
                        column,
                        sql: self.full_sql.clone(),
                    });
            }
        }

        row.len()
            .checked_sub(fallback_from_end)
            .and_then(|index| row.get(index))
            .map(String::as_str)
            .context(ColumnNotFoundSnafu {
                column,
                sql: self.full_sql.clone(),
            })
    }
}
