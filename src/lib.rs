//! Transparent column-encryption SQL rewriting for a database proxy.
//!
//! Applications keep issuing plain SQL. For each INSERT the proxy scans the
//! statement, consults the encrypt rule, and splices the assisted-query and
//! plain storage columns an encrypted logical column needs into the explicit
//! column list. Rewrites are positional text edits against the original
//! statement, not a re-serialization. Deciding which column *names* to add
//! is this crate's job; encrypting the values themselves is not.

pub mod error;
pub mod parse;
pub mod rewrite;
pub mod rule;
pub mod statement;
pub mod token;

pub use error::{Result, RewriteError};
pub use rewrite::rewrite;
pub use rule::registry::RuleRegistry;
pub use rule::{EncryptRule, EncryptTable};
