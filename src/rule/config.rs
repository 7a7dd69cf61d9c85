use std::collections::HashMap;

use serde::Deserialize;

/// Administrative description of the encrypt rule, typically deserialized
/// from the proxy's configuration file. [`EncryptRule::from_config`] turns
/// it into the read-only index the rewrite path works against.
///
/// [`EncryptRule::from_config`]: crate::rule::EncryptRule::from_config
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncryptRuleConfig {
    #[serde(default)]
    pub tables: HashMap<String, EncryptTableConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncryptTableConfig {
    #[serde(default)]
    pub columns: HashMap<String, EncryptColumnConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EncryptColumnConfig {
    pub cipher_column: Option<String>,
    pub assisted_query_column: Option<String>,
    pub plain_column: Option<String>,
}
