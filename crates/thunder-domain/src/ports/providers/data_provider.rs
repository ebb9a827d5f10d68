//! Data Provider Port
//!
//! The capability set every database technology has to offer to the
//! data-access layer: parameter and field syntax, the two query shapes the
//! query builder needs, and identity-returning execution.
//!
//! Resolved providers are handed out as `Arc<dyn DataProvider>`. The trait is
//! downcastable so callers that need the concrete type can recover it:
//!
//! ```ignore
//! let provider = resolve_provider("System.Data.SqlClient")?;
//! assert!(provider.is::<SqlServerProvider>());
//! ```

use crate::constants::FIELD_PLACEHOLDER;
use crate::error::Result;
use crate::value_objects::SqlValue;
use downcast_rs::{DowncastSync, impl_downcast};

/// SQL dialect capability set selected by provider identifier
///
/// `where_clause` in the query builders is everything that follows the
/// projection (`FROM` source, filters, ordering). Implementations must place it
/// verbatim.
pub trait DataProvider: DowncastSync {
    /// Prefix of named parameters in command text (`@`, `:`, `?`)
    fn parameter_identifier(&self) -> &str;

    /// Template used to quote a field name, with `{0}` standing for the name
    fn field_format(&self) -> &str;

    /// Build a query returning every row matched by `where_clause`
    fn select_all_query(&self, projection: &str, where_clause: &str) -> String;

    /// Build a query returning at most `count` rows matched by `where_clause`
    fn select_take_query(&self, projection: &str, where_clause: &str, count: usize) -> String;

    /// Execute an insert command and return the identity it generated
    fn execute_get_identity(&self, command: &str, params: &[SqlValue]) -> Result<i64>;

    /// Get the name of this provider
    fn provider_name(&self) -> &str;

    /// Quote a field name with this provider's field format
    fn format_field(&self, field: &str) -> String {
        self.field_format().replace(FIELD_PLACEHOLDER, field)
    }

    /// Prefix a parameter name with this provider's parameter identifier
    fn format_parameter(&self, name: &str) -> String {
        format!("{}{}", self.parameter_identifier(), name)
    }
}

impl_downcast!(sync DataProvider);

impl std::fmt::Debug for dyn DataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProvider").finish_non_exhaustive()
    }
}
