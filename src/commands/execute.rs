use super::{Statement, StatementKind};
use log::debug;

/// Result of running a statement against the storage engine.
#[derive(Debug, PartialEq, Eq)]
pub enum ExecutionResult {
    Success,
    /// Accepted, but no storage engine is attached so nothing was written or read.
    NotPersisted(StatementKind),
    Failure(String),
}

impl ExecutionResult {
    /// Placeholder line describing what a stubbed statement would have done.
    pub fn acknowledgement(&self) -> Option<&'static str> {
        match self {
            Self::NotPersisted(StatementKind::Insert) => Some("This is where we would do an insert."),
            Self::NotPersisted(StatementKind::Select) => Some("This is where we would do a select."),
            Self::Success | Self::Failure(_) => None,
        }
    }
}

pub fn execute_statement(statement: Statement) -> ExecutionResult {
    debug!("executing {} statement without a storage engine", statement.kind());

    ExecutionResult::NotPersisted(statement.kind())
}

#[cfg(test)]
mod tests {
    use super::{execute_statement, ExecutionResult};
    use crate::commands::{Statement, StatementKind};

    #[test]
    fn test_execute_is_not_persisted() {
        for kind in StatementKind::ALL {
            assert_eq!(
                execute_statement(Statement::new(kind)),
                ExecutionResult::NotPersisted(kind)
            );
        }
    }

    #[test]
    fn test_acknowledgement() {
        let insert = execute_statement(Statement::new(StatementKind::Insert));
        let select = execute_statement(Statement::new(StatementKind::Select));

        assert_eq!(
            insert.acknowledgement(),
            Some("This is where we would do an insert.")
        );
        assert_eq!(
            select.acknowledgement(),
            Some("This is where we would do a select.")
        );
        assert_eq!(ExecutionResult::Success.acknowledgement(), None);
        assert_eq!(
            ExecutionResult::Failure("disk full".to_string()).acknowledgement(),
            None
        );
    }
}
