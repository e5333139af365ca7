use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum EngineError {
    #[snafu(display("Column {column} not found in result of: {sql}"))]
    ColumnNotFound { column: String, sql: String },

    #[snafu(display("Result of {sql} contains no rows"))]
    EmptyResult { sql: String },

    #[snafu(display("Unrecognized server version string: {raw}"))]
    VersionNotRecognized { raw: String },

    #[snafu(display("Query failed: {message}"))]
    QueryFailed { message: String },

    #[snafu(display("SQL parse error: {source}"))]
    SqlParse {
        source: sqlparser::parser::ParserError,
    },
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
