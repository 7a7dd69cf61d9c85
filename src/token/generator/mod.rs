//! The generator family: each member inspects one statement context and
//! contributes rewrite tokens for its own concern.

pub mod assist_query_and_plain;

use std::sync::Arc;

use crate::error::Result;
use crate::rule::EncryptRule;
use crate::statement::StatementContext;
use crate::token::SqlToken;

use self::assist_query_and_plain::AssistQueryAndPlainInsertColumns;

/// One member of the statement rewrite token generator family.
///
/// `generate` may assume `is_applicable` returned true for the same context;
/// the pipeline enforces that ordering. Token iteration order carries no
/// meaning for the splicer, which orders by offset before applying.
pub trait CollectionTokenGenerator {
    fn is_applicable(&self, ctx: &StatementContext) -> bool;
    fn generate(&self, ctx: &StatementContext) -> Result<Vec<Box<dyn SqlToken>>>;
}

/// The generator pipeline for one rule snapshot.
pub struct TokenGenerators {
    generators: Vec<Box<dyn CollectionTokenGenerator>>,
}

impl TokenGenerators {
    /// Wires every generator against the same snapshot, so applicability
    /// and generation can never disagree about what the rule contains.
    pub fn for_rule(rule: Arc<EncryptRule>) -> Self {
        Self {
            generators: vec![Box::new(AssistQueryAndPlainInsertColumns::new(rule))],
        }
    }

    pub fn generate(&self, ctx: &StatementContext) -> Result<Vec<Box<dyn SqlToken>>> {
        let mut tokens = Vec::new();
        for generator in &self.generators {
            if generator.is_applicable(ctx) {
                tokens.extend(generator.generate(ctx)?);
            }
        }
        Ok(tokens)
    }
}
