//! Command Executor Port
//!
//! The connection runtime lives outside Thunder. Providers only build the
//! dialect-specific command text and hand it to an executor.

use crate::error::Result;
use crate::value_objects::SqlValue;

/// Runs commands against an open connection
pub trait CommandExecutor: Send + Sync {
    /// Execute a command and return the number of affected rows
    fn execute(&self, command: &str, params: &[SqlValue]) -> Result<u64>;

    /// Execute a command and return the first column of the first row
    ///
    /// Returns [`SqlValue::Null`] when the command produced no rows.
    fn execute_scalar(&self, command: &str, params: &[SqlValue]) -> Result<SqlValue>;

    /// Get the name of this executor, used in diagnostics
    fn executor_name(&self) -> &str {
        "unnamed"
    }
}
