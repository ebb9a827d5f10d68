//! SQL Server data provider
//!
//! Named parameters use `@`, identifiers are bracket-quoted, row limiting uses
//! `TOP n` and generated identities come from `SCOPE_IDENTITY()`.

use std::fmt;
use std::sync::Arc;

use thunder_application::ports::registry::{DATA_PROVIDERS, DataProviderConfig, DataProviderEntry};
use thunder_application::registry::{ProviderDescriptor, ProviderFactory};
use thunder_domain::constants::SQL_SERVER_PROVIDER;
use thunder_domain::error::Result;
use thunder_domain::ports::{CommandExecutor, DataProvider};
use thunder_domain::value_objects::SqlValue;

use super::common::{compose, fetch_identity};
use crate::constants::{
    SQL_SERVER_FIELD_FORMAT, SQL_SERVER_IDENTITY_QUERY, SQL_SERVER_PARAMETER_IDENTIFIER,
};

/// SQL Server data provider
///
/// # Example
///
/// ```rust
/// use thunder_providers::{DataProvider, SqlServerProvider};
///
/// let provider = SqlServerProvider::new();
/// assert_eq!(
///     provider.select_take_query("*", "FROM Cars", 5),
///     "SELECT TOP 5 * FROM Cars"
/// );
/// ```
#[derive(Clone, Default)]
pub struct SqlServerProvider {
    executor: Option<Arc<dyn CommandExecutor>>,
}

impl SqlServerProvider {
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

impl fmt::Debug for SqlServerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlServerProvider")
            .field("executor", &self.executor.as_ref().map(|e| e.executor_name()))
            .finish()
    }
}

impl DataProvider for SqlServerProvider {
    fn parameter_identifier(&self) -> &str {
        SQL_SERVER_PARAMETER_IDENTIFIER
    }

    fn field_format(&self) -> &str {
        SQL_SERVER_FIELD_FORMAT
    }

    fn select_all_query(&self, projection: &str, where_clause: &str) -> String {
        compose(&["SELECT", projection, where_clause])
    }

    fn select_take_query(&self, projection: &str, where_clause: &str, count: usize) -> String {
        compose(&["SELECT TOP", &count.to_string(), projection, where_clause])
    }

    fn execute_get_identity(&self, command: &str, params: &[SqlValue]) -> Result<i64> {
        fetch_identity(
            self.provider_name(),
            self.executor.as_ref(),
            command,
            SQL_SERVER_IDENTITY_QUERY,
            params,
        )
    }

    fn provider_name(&self) -> &str {
        "sqlserver"
    }
}

impl ProviderFactory for SqlServerProvider {
    fn from_config(config: &DataProviderConfig) -> Result<Self> {
        Ok(Self {
            executor: config.executor.clone(),
        })
    }
}

#[linkme::distributed_slice(DATA_PROVIDERS)]
static SQL_SERVER_DATA_PROVIDER: DataProviderEntry = DataProviderEntry {
    name: SQL_SERVER_PROVIDER,
    description: "Microsoft SQL Server data provider",
    descriptor: ProviderDescriptor::of::<SqlServerProvider>,
};
