//! The encrypt rule: which logical columns are encrypted, and where their
//! ciphertext, assisted-query and plain copies are stored.

pub mod config;
pub mod registry;

use std::collections::HashMap;

use crate::rule::config::EncryptRuleConfig;

/// Storage targets for one encrypted logical column. Any subset may be
/// present.
#[derive(Debug, Clone, Default)]
pub struct EncryptColumn {
    cipher_column: Option<String>,
    assisted_query_column: Option<String>,
    plain_column: Option<String>,
}

impl EncryptColumn {
    fn is_empty(&self) -> bool {
        self.cipher_column.is_none()
            && self.assisted_query_column.is_none()
            && self.plain_column.is_none()
    }
}

/// Encryption metadata for one table, keyed by logical column name.
#[derive(Debug, Clone, Default)]
pub struct EncryptTable {
    columns: HashMap<String, EncryptColumn>,
}

impl EncryptTable {
    pub fn cipher_column(&self, logical: &str) -> Option<&str> {
        self.columns
            .get(logical)
            .and_then(|c| c.cipher_column.as_deref())
    }

    pub fn assisted_query_column(&self, logical: &str) -> Option<&str> {
        self.columns
            .get(logical)
            .and_then(|c| c.assisted_query_column.as_deref())
    }

    pub fn plain_column(&self, logical: &str) -> Option<&str> {
        self.columns
            .get(logical)
            .and_then(|c| c.plain_column.as_deref())
    }
}

/// Read-only index from table name to its encryption metadata.
///
/// Tables that configure no encrypted columns never appear here, so a
/// successful lookup means encryption applies to the table.
#[derive(Debug, Clone, Default)]
pub struct EncryptRule {
    tables: HashMap<String, EncryptTable>,
}

impl EncryptRule {
    pub fn from_config(config: EncryptRuleConfig) -> Self {
        let mut tables = HashMap::new();
        for (table_name, table_config) in config.tables {
            let mut columns = HashMap::new();
            for (logical, column_config) in table_config.columns {
                let column = EncryptColumn {
                    cipher_column: column_config.cipher_column,
                    assisted_query_column: column_config.assisted_query_column,
                    plain_column: column_config.plain_column,
                };
                if !column.is_empty() {
                    columns.insert(logical, column);
                }
            }
            if !columns.is_empty() {
                tables.insert(table_name, EncryptTable { columns });
            }
        }
        Self { tables }
    }

    pub fn find_encrypt_table(&self, table: &str) -> Option<&EncryptTable> {
        self.tables.get(table)
    }
}
