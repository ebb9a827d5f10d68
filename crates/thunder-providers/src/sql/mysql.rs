//! MySQL data provider

use std::fmt;
use std::sync::Arc;

use thunder_application::ports::registry::{DATA_PROVIDERS, DataProviderConfig, DataProviderEntry};
use thunder_application::registry::{ProviderDescriptor, ProviderFactory};
use thunder_domain::constants::MYSQL_PROVIDER;
use thunder_domain::error::Result;
use thunder_domain::ports::{CommandExecutor, DataProvider};
use thunder_domain::value_objects::SqlValue;

use super::common::{compose, fetch_identity};
use crate::constants::{MYSQL_FIELD_FORMAT, MYSQL_IDENTITY_QUERY, MYSQL_PARAMETER_IDENTIFIER};

/// MySQL data provider
#[derive(Clone, Default)]
pub struct MySqlProvider {
    executor: Option<Arc<dyn CommandExecutor>>,
}

impl MySqlProvider {
    /// Create a provider with no executor bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider that runs commands through `executor`
    pub fn with_executor(executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            executor: Some(executor),
        }
    }
}

impl fmt::Debug for MySqlProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlProvider")
            .field("executor", &self.executor.as_ref().map(|e| e.executor_name()))
            .finish()
    }
}

impl DataProvider for MySqlProvider {
    fn parameter_identifier(&self) -> &str {
        MYSQL_PARAMETER_IDENTIFIER
    }

    fn field_format(&self) -> &str {
        MYSQL_FIELD_FORMAT
    }

    fn select_all_query(&self, projection: &str, where_clause: &str) -> String {
        compose(&["SELECT", projection, where_clause])
    }

    fn select_take_query(&self, projection: &str, where_clause: &str, count: usize) -> String {
        compose(&["SELECT", projection, where_clause, "LIMIT", &count.to_string()])
    }

    fn execute_get_identity(&self, command: &str, params: &[SqlValue]) -> Result<i64> {
        fetch_identity(
            self.provider_name(),
            self.executor.as_ref(),
            command,
            MYSQL_IDENTITY_QUERY,
            params,
        )
    }

    fn provider_name(&self) -> &str {
        "mysql"
    }
}

impl ProviderFactory for MySqlProvider {
    fn from_config(config: &DataProviderConfig) -> Result<Self> {
        Ok(Self {
            executor: config.executor.clone(),
        })
    }
}

#[linkme::distributed_slice(DATA_PROVIDERS)]
static MYSQL_DATA_PROVIDER: DataProviderEntry = DataProviderEntry {
    name: MYSQL_PROVIDER,
    description: "MySQL data provider",
    descriptor: ProviderDescriptor::of::<MySqlProvider>,
};
