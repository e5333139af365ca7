use serde::{Deserialize, Serialize};

/// Tabular output of one administrative query round-trip.
///
/// Row shape (cell count) is uniform within one result but varies across
/// server versions and deployments; `column_list` names the positional cells
/// when the server reports them, and is absent otherwise. Length consistency
/// between `column_list` and rows is a producer obligation, not enforced here.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub full_sql: String,
    pub rows: Vec<Vec<String>>,
    pub column_list: Option<Vec<String>>,
}

impl ResultSet {
    #[must_use]
    pub fn new(full_sql: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            full_sql: full_sql.into(),
            rows,
            column_list: None,
        }
    }

    #[must_use]
    pub fn with_column_list(mut self, column_list: Vec<String>) -> Self {
        self.column_list = Some(column_list);
        self
    }
}

pub const ERRLEVEL_PASS: u8 = 0;
pub const ERRLEVEL_WARNING: u8 = 1;
pub const ERRLEVEL_ERROR: u8 = 2;

pub const SYNTAX_TYPE_OTHER: u8 = 0;
pub const SYNTAX_TYPE_DDL: u8 = 1;
pub const SYNTAX_TYPE_DML: u8 = 2;

/// Field names of a [`ReviewResult`] row, reported as `column_list` of a
/// [`CheckResult`] so consumers can render review rows as a table.
pub const REVIEW_COLUMNS: &[&str] = &[
    "id",
    "stage",
    "errlevel",
    "stage_status",
    "error_message",
    "sql",
    "affected_rows",
    "execute_time",
];

/// One reviewed statement within a [`CheckResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewResult {
    pub id: usize,
    pub stage: String,
    pub errlevel: u8,
    pub stage_status: String,
    pub error_message: String,
    pub sql: String,
    pub affected_rows: u64,
    pub execute_time: String,
}

/// Aggregated outcome of checking one submitted SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub full_sql: String,
    pub is_execute: bool,
    pub checked: bool,
    pub warning: String,
    pub error: String,
    pub warning_count: usize,
    pub error_count: usize,
    pub is_critical: bool,
    pub syntax_type: u8,
    pub rows: Vec<ReviewResult>,
    pub column_list: Vec<String>,
    pub status: String,
    pub affected_rows: u64,
}
