//! Data Provider Registry Entries
//!
//! Built-in providers register themselves via `linkme::distributed_slice` and
//! are seeded into every [`ProviderRegistry`](crate::registry::ProviderRegistry)
//! created with `with_builtins`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thunder_domain::ports::CommandExecutor;

use crate::registry::ProviderDescriptor;

/// Configuration for data provider creation
///
/// Contains everything a provider factory might need. Providers should use
/// what they need and ignore the rest.
#[derive(Clone, Default)]
pub struct DataProviderConfig {
    /// Provider identifier (e.g., "System.Data.SqlClient")
    pub provider: String,
    /// Connection string the provider is created for
    pub connection_string: Option<String>,
    /// Executor the provider runs commands with
    pub executor: Option<Arc<dyn CommandExecutor>>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl DataProviderConfig {
    /// Create a new config with the given provider identifier
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the connection string
    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = Some(connection_string.into());
        self
    }

    /// Set the command executor
    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for DataProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataProviderConfig")
            .field("provider", &self.provider)
            .field("connection_string", &self.connection_string.as_ref().map(|_| "<redacted>"))
            .field(
                "executor",
                &self.executor.as_ref().map(|executor| executor.executor_name()),
            )
            .field("extra", &self.extra)
            .finish()
    }
}

/// Registry entry for built-in data providers
///
/// Each built-in provider registers itself with this entry using
/// `linkme::distributed_slice`. `descriptor` is a function because type
/// identity cannot be computed in a static initializer.
pub struct DataProviderEntry {
    /// Provider identifier (e.g., "System.Data.SqlClient")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the implementation descriptor bound to `name`
    pub descriptor: fn() -> ProviderDescriptor,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static DATA_PROVIDERS: [DataProviderEntry] = [..];

/// List all built-in data providers
///
/// Returns (identifier, description) tuples sorted by identifier. Providers
/// only appear when `thunder-providers` is linked into the final binary.
pub fn list_builtin_data_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<(&'static str, &'static str)> = DATA_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    providers.sort_unstable();
    providers
}
