//! The text splicer: turns a statement plus its rewrite tokens into the SQL
//! the proxy actually sends downstream.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::parse;
use crate::rule::EncryptRule;
use crate::token::SqlToken;
use crate::token::generator::TokenGenerators;

/// Rewrite one statement against a rule snapshot.
///
/// Statements the scanner does not recognize, and INSERTs that need no
/// extra storage columns, come back unchanged.
pub fn rewrite(rule: Arc<EncryptRule>, sql: &str) -> Result<String> {
    let ctx = parse::scan(sql)?;
    let mut tokens = TokenGenerators::for_rule(rule).generate(&ctx)?;
    if tokens.is_empty() {
        return Ok(sql.to_string());
    }
    // Generators make no ordering promise; the splice below requires
    // ascending offsets.
    tokens.sort_by_key(|token| token.offset());
    debug!(tokens = tokens.len(), "splicing insert column tokens");
    Ok(splice(sql, &tokens))
}

fn splice(sql: &str, tokens: &[Box<dyn SqlToken>]) -> String {
    let mut rewritten = String::with_capacity(sql.len() + tokens.len() * 16);
    let mut cursor = 0;
    for token in tokens {
        rewritten.push_str(&sql[cursor..token.offset()]);
        rewritten.push_str(&token.to_string());
        cursor = token.offset();
    }
    rewritten.push_str(&sql[cursor..]);
    rewritten
}
