pub mod args;
pub mod execute;
pub mod meta;
pub mod prepare;

use std::fmt;

/// Kind of data-manipulation statement. Variants are matched by keyword
/// prefix in the order of [`StatementKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    Select,
}

impl StatementKind {
    pub const ALL: [StatementKind; 2] = [StatementKind::Insert, StatementKind::Select];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A prepared statement. Carries no operands yet.
#[derive(Debug, PartialEq, Eq)]
pub struct Statement {
    kind: StatementKind,
}

impl Statement {
    pub fn new(kind: StatementKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> StatementKind {
        self.kind
    }
}
