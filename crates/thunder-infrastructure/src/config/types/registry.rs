//! Registry configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Data provider registry configuration
///
/// ```toml
/// [registry.aliases]
/// "Microsoft.Data.SqlClient" = "System.Data.SqlClient"
/// "MySqlConnector" = "MySql.Data.MySqlClient"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Extra identifiers bound to the implementation of an existing identifier
    ///
    /// Keys are the new identifiers, values the identifiers they alias. A target
    /// may itself be an alias declared here.
    pub aliases: BTreeMap<String, String>,
}

impl RegistryConfig {
    /// Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), target.into());
        self
    }
}
