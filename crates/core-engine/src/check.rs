use sqlparser::ast::Statement;
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

use crate::models::{
    CheckResult, ERRLEVEL_ERROR, ERRLEVEL_PASS, ERRLEVEL_WARNING, REVIEW_COLUMNS, ReviewResult,
    SYNTAX_TYPE_DDL, SYNTAX_TYPE_DML, SYNTAX_TYPE_OTHER,
};

const STAGE_CHECKED: &str = "CHECKED";
const STAGE_STATUS_PASSED: &str = "Audit completed";
const STAGE_STATUS_FAILED: &str = "Audit failed";
const STATUS_SUCCESS: &str = "audit_success";
const STATUS_FAILURE: &str = "audit_failure";

/// Splits `sql` into statements and produces one review row per statement.
///
/// Doris speaks the MySQL dialect on the wire, so both adapters share this
/// routine. A text that fails to parse yields a single error-level row
/// carrying the parser message; the check itself never raises.
#[must_use]
pub fn review_statements(db_name: &str, sql: &str) -> CheckResult {
    let full_sql = sql.trim();

    match Parser::parse_sql(&MySqlDialect {}, full_sql) {
        Ok(statements) => {
            tracing::debug!(db_name, statements = statements.len(), "statement review");
            let rows: Vec<ReviewResult> = statements
                .iter()
                .enumerate()
                .map(|(index, statement)| ReviewResult {
                    id: index + 1,
                    stage: STAGE_CHECKED.to_string(),
                    errlevel: ERRLEVEL_PASS,
                    stage_status: STAGE_STATUS_PASSED.to_string(),
                    error_message: String::new(),
                    sql: statement.to_string(),
                    affected_rows: 0,
                    execute_time: "0".to_string(),
                })
                .collect();
            let syntax_type = statements.first().map_or(SYNTAX_TYPE_OTHER, syntax_type);
            let is_critical = statements.iter().any(is_critical_statement);
            assemble(full_sql, rows, syntax_type, is_critical)
        }
        Err(parse_error) => {
            tracing::debug!(db_name, %parse_error, "statement review rejected");
            let rows = vec![ReviewResult {
                id: 1,
                stage: STAGE_CHECKED.to_string(),
                errlevel: ERRLEVEL_ERROR,
                stage_status: STAGE_STATUS_FAILED.to_string(),
                error_message: parse_error.to_string(),
                sql: full_sql.to_string(),
                affected_rows: 0,
                execute_time: "0".to_string(),
            }];
            assemble(full_sql, rows, SYNTAX_TYPE_OTHER, false)
        }
    }
}

fn assemble(
    full_sql: &str,
    rows: Vec<ReviewResult>,
    syntax_type: u8,
    is_critical: bool,
) -> CheckResult {
    let warning_count = rows
        .iter()
        .filter(|row| row.errlevel == ERRLEVEL_WARNING)
        .count();
    let error_count = rows
        .iter()
        .filter(|row| row.errlevel == ERRLEVEL_ERROR)
        .count();
    let warning = join_messages(&rows, ERRLEVEL_WARNING);
    let error = join_messages(&rows, ERRLEVEL_ERROR);
    let status = if error_count == 0 {
        STATUS_SUCCESS
    } else {
        STATUS_FAILURE
    };

    CheckResult {
        full_sql: full_sql.to_string(),
        is_execute: false,
        checked: true,
        warning,
        error,
        warning_count,
        error_count,
        is_critical,
        syntax_type,
        rows,
        column_list: REVIEW_COLUMNS.iter().map(ToString::to_string).collect(),
        status: status.to_string(),
        affected_rows: 0,
    }
}

fn join_messages(rows: &[ReviewResult], errlevel: u8) -> String {
    rows.iter()
        .filter(|row| row.errlevel == errlevel)
        .map(|row| row.error_message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn syntax_type(statement: &Statement) -> u8 {
    match statement {
        Statement::CreateTable(..)
        | Statement::CreateIndex(..)
        | Statement::CreateView { .. }
        | Statement::CreateDatabase { .. }
        | Statement::CreateSchema { .. }
        | Statement::AlterTable { .. }
        | Statement::AlterView { .. }
        | Statement::Drop { .. }
        | Statement::Truncate { .. }
        | Statement::RenameTable(..) => SYNTAX_TYPE_DDL,
        Statement::Query(..) | Statement::Insert(..) | Statement::Update { .. }
        | Statement::Delete(..) => SYNTAX_TYPE_DML,
        _ => SYNTAX_TYPE_OTHER,
    }
}

fn is_critical_statement(statement: &Statement) -> bool {
    matches!(
        statement,
        Statement::Drop { .. } | Statement::Truncate { .. }
    )
}
