//! Oracle data provider
//!
//! Oracle has no session-scoped identity function; generated keys come from
//! sequences the caller owns, so identity retrieval is reported as unsupported.

use std::fmt;
use std::sync::Arc;

use thunder_application::ports::registry::{DATA_PROVIDERS, DataProviderConfig, DataProviderEntry};
use thunder_application::registry::{ProviderDescriptor, ProviderFactory};
use thunder_domain::constants::ORACLE_PROVIDER;
use thunder_domain::error::{Error, Result};
use thunder_domain::ports::{CommandExecutor, DataProvider};
use thunder_domain::value_objects::SqlValue;

use super::common::compose;
use crate::constants::{ORACLE_FIELD_FORMAT, ORACLE_PARAMETER_IDENTIFIER};

/// Oracle data provider
#[derive(Clone, Default)]
pub struct OracleProvider {
    executor: Option<Arc<dyn CommandExecutor>>,
}

impl OracleProvider {
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

impl fmt::Debug for OracleProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleProvider")
            .field("executor", &self.executor.as_ref().map(|e| e.executor_name()))
            .finish()
    }
}

impl DataProvider for OracleProvider {
    fn parameter_identifier(&self) -> &str {
        ORACLE_PARAMETER_IDENTIFIER
    }

    fn field_format(&self) -> &str {
        ORACLE_FIELD_FORMAT
    }

    fn select_all_query(&self, projection: &str, where_clause: &str) -> String {
        compose(&["SELECT", projection, where_clause])
    }

    // ROWNUM is assigned before ORDER BY runs, so the ordered query is wrapped
    fn select_take_query(&self, projection: &str, where_clause: &str, count: usize) -> String {
        format!(
            "SELECT * FROM ({}) WHERE ROWNUM <= {count}",
            compose(&["SELECT", projection, where_clause])
        )
    }

    fn execute_get_identity(&self, _command: &str, _params: &[SqlValue]) -> Result<i64> {
        if self.executor.is_none() {
            return Err(Error::not_connected(self.provider_name()));
        }
        Err(Error::unsupported(
            self.provider_name(),
            "generated identity retrieval",
        ))
    }

    fn provider_name(&self) -> &str {
        "oracle"
    }
}

impl ProviderFactory for OracleProvider {
    fn from_config(config: &DataProviderConfig) -> Result<Self> {
        Ok(Self {
            executor: config.executor.clone(),
        })
    }
}

#[linkme::distributed_slice(DATA_PROVIDERS)]
static ORACLE_DATA_PROVIDER: DataProviderEntry = DataProviderEntry {
    name: ORACLE_PROVIDER,
    description: "Oracle Database data provider",
    descriptor: ProviderDescriptor::of::<OracleProvider>,
};
