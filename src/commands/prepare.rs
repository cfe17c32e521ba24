use super::{Statement, StatementKind};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PrepareError {
    #[error("Unrecognized  keyword at start of: '{0}'")]
    UnrecognizedStatement(String),
}

/// Classifies `buffer` by its leading keyword. Matching is case-insensitive
/// and prefix based; leading whitespace is not skipped.
pub fn prepare_statement(buffer: &str) -> Result<Statement, PrepareError> {
    let input = buffer.to_lowercase();

    StatementKind::ALL
        .into_iter()
        .find(|kind| input.starts_with(kind.keyword()))
        .map(Statement::new)
        .ok_or_else(|| PrepareError::UnrecognizedStatement(buffer.to_string()))
}
