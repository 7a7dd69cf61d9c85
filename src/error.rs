use thiserror::Error;

/// Errors surfaced while rewriting one statement.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The encrypt rule reported a table during the applicability check but
    /// lost it before token generation. Both calls run against one rule
    /// snapshot, so hitting this means the snapshot was mutated in place.
    /// Aborting is deliberate: silently skipping the extra columns would
    /// store plaintext where ciphertext belongs.
    #[error("encrypt metadata for table `{table}` disappeared mid-rewrite")]
    MetadataConsistency { table: String },

    /// The statement scanner recognized an INSERT but could not make sense
    /// of its column list.
    #[error("statement scan failed: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RewriteError>;
