use std::sync::Arc;

use parking_lot::RwLock;

use crate::rule::EncryptRule;

/// Holds the encrypt rule the proxy is currently rewriting against.
///
/// A rewrite takes one `snapshot()` and uses it for the whole statement, so
/// applicability checks and token generation always agree on what the rule
/// contains. `publish()` swaps the pointer; in-flight rewrites keep their
/// old snapshot and never observe a partially updated rule.
#[derive(Debug)]
pub struct RuleRegistry {
    current: RwLock<Arc<EncryptRule>>,
}

impl RuleRegistry {
    pub fn new(rule: EncryptRule) -> Self {
        Self {
            current: RwLock::new(Arc::new(rule)),
        }
    }

    pub fn snapshot(&self) -> Arc<EncryptRule> {
        self.current.read().clone()
    }

    pub fn publish(&self, rule: EncryptRule) {
        *self.current.write() = Arc::new(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::config::{EncryptColumnConfig, EncryptRuleConfig, EncryptTableConfig};

    fn rule_for(table: &str) -> EncryptRule {
        let mut table_config = EncryptTableConfig::default();
        table_config.columns.insert(
            "pwd".to_string(),
            EncryptColumnConfig {
                cipher_column: Some("pwd_cipher".to_string()),
                assisted_query_column: None,
                plain_column: None,
            },
        );
        let mut config = EncryptRuleConfig::default();
        config.tables.insert(table.to_string(), table_config);
        EncryptRule::from_config(config)
    }

    #[test]
    fn publish_swaps_rule_for_new_snapshots() {
        let registry = RuleRegistry::new(rule_for("t_user"));
        registry.publish(rule_for("t_order"));

        let current = registry.snapshot();
        assert!(current.find_encrypt_table("t_user").is_none());
        assert!(current.find_encrypt_table("t_order").is_some());
    }

    #[test]
    fn in_flight_snapshot_survives_publish() {
        let registry = RuleRegistry::new(rule_for("t_user"));
        let held = registry.snapshot();

        registry.publish(rule_for("t_order"));
        assert!(held.find_encrypt_table("t_user").is_some());
    }
}
