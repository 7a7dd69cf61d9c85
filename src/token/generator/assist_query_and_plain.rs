use std::sync::Arc;

use crate::error::{Result, RewriteError};
use crate::rule::{EncryptRule, EncryptTable};
use crate::statement::{ColumnSegment, StatementContext};
use crate::token::{InsertColumnsToken, SqlToken};

use super::CollectionTokenGenerator;

/// Expands an INSERT's explicit column list with the assisted-query and
/// plain columns its encrypted logical columns store into.
///
/// Each source column whose plan is non-empty yields one token anchored
/// just past the column name (`stop_index + 1`), so the splicer can patch
/// the original text in place. Distinct columns have disjoint spans and so
/// never collide on an offset; tokens are never merged.
pub struct AssistQueryAndPlainInsertColumns {
    rule: Arc<EncryptRule>,
}

impl AssistQueryAndPlainInsertColumns {
    pub fn new(rule: Arc<EncryptRule>) -> Self {
        Self { rule }
    }

    /// Extra storage columns for one logical column: assisted-query name
    /// first, then plain. The ordering is part of the splicer contract.
    fn extra_columns(table: &EncryptTable, segment: &ColumnSegment) -> Vec<String> {
        let mut columns = Vec::new();
        if let Some(assisted) = table.assisted_query_column(&segment.name) {
            columns.push(assisted.to_string());
        }
        if let Some(plain) = table.plain_column(&segment.name) {
            columns.push(plain.to_string());
        }
        columns
    }
}

impl CollectionTokenGenerator for AssistQueryAndPlainInsertColumns {
    fn is_applicable(&self, ctx: &StatementContext) -> bool {
        match ctx {
            StatementContext::Insert(insert) => {
                insert.uses_explicit_columns()
                    && self.rule.find_encrypt_table(insert.table()).is_some()
            }
            StatementContext::Unsupported => false,
        }
    }

    fn generate(&self, ctx: &StatementContext) -> Result<Vec<Box<dyn SqlToken>>> {
        let StatementContext::Insert(insert) = ctx else {
            return Ok(Vec::new());
        };
        // Same snapshot as is_applicable; a miss here means the rule was
        // mutated in place, and skipping would store plaintext.
        let table = self.rule.find_encrypt_table(insert.table()).ok_or_else(|| {
            RewriteError::MetadataConsistency {
                table: insert.table().to_string(),
            }
        })?;

        let mut tokens: Vec<Box<dyn SqlToken>> = Vec::new();
        for segment in insert.columns() {
            let columns = Self::extra_columns(table, segment);
            if !columns.is_empty() {
                tokens.push(Box::new(InsertColumnsToken::new(
                    segment.stop_index + 1,
                    columns,
                )));
            }
        }
        Ok(tokens)
    }
}
