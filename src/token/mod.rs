//! Rewrite tokens: positional edit instructions consumed by the text
//! splicer.

pub mod generator;

use std::fmt;

/// A positional edit instruction. The splicer sorts tokens by `offset` and
/// inserts each token's rendered text immediately before that position in
/// the original statement.
pub trait SqlToken: fmt::Display + fmt::Debug {
    fn offset(&self) -> usize;
}

/// Splices extra column names into an INSERT's explicit column list.
///
/// `columns` keeps the planner's ordering (assisted-query before plain).
/// The splicer may reorder whole tokens by offset but never the names
/// inside one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertColumnsToken {
    offset: usize,
    columns: Vec<String>,
}

impl InsertColumnsToken {
    /// `columns` must be non-empty; generators skip columns whose plan came
    /// back empty instead of emitting hollow tokens.
    pub fn new(offset: usize, columns: Vec<String>) -> Self {
        debug_assert!(!columns.is_empty());
        Self { offset, columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl SqlToken for InsertColumnsToken {
    fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for InsertColumnsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.columns {
            write!(f, ", {column}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_comma_prefixed_list() {
        let token = InsertColumnsToken::new(
            25,
            vec!["pwd_assist".to_string(), "pwd_plain".to_string()],
        );
        assert_eq!(token.offset(), 25);
        assert_eq!(token.to_string(), ", pwd_assist, pwd_plain");
    }

    #[test]
    fn renders_single_column() {
        let token = InsertColumnsToken::new(10, vec!["pwd_assist".to_string()]);
        assert_eq!(token.to_string(), ", pwd_assist");
    }
}
