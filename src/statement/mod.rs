//! Read-only views of parsed statements, as far as the rewrite core needs
//! to see them.

/// A column name with its exact lexical span in the original statement text.
///
/// Spans are inclusive on both ends and come straight from the scanner; the
/// rewrite core trusts them without re-validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSegment {
    pub name: String,
    pub start_index: usize,
    pub stop_index: usize,
}

impl ColumnSegment {
    pub fn new(name: impl Into<String>, start_index: usize, stop_index: usize) -> Self {
        Self {
            name: name.into(),
            start_index,
            stop_index,
        }
    }
}

/// One INSERT statement: single target table, plus the explicit column list
/// when the statement names one.
#[derive(Debug, Clone)]
pub struct InsertStatementContext {
    table: String,
    columns: Vec<ColumnSegment>,
    explicit_columns: bool,
}

impl InsertStatementContext {
    pub fn new(table: impl Into<String>, columns: Vec<ColumnSegment>) -> Self {
        Self {
            table: table.into(),
            columns,
            explicit_columns: true,
        }
    }

    /// An INSERT relying on the table's default column order.
    pub fn with_default_columns(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            explicit_columns: false,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn uses_explicit_columns(&self) -> bool {
        self.explicit_columns
    }

    /// Column segments in source order. Empty for default-column INSERTs.
    pub fn columns(&self) -> &[ColumnSegment] {
        &self.columns
    }
}

/// One parsed statement. Everything the scanner does not understand lands in
/// `Unsupported` and passes through the rewrite untouched.
#[derive(Debug, Clone)]
pub enum StatementContext {
    Insert(InsertStatementContext),
    Unsupported,
}
