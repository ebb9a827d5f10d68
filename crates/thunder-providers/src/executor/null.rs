//! Null command executor for testing
//!
//! An executor that accepts every command without running it.

use thunder_domain::error::Result;
use thunder_domain::ports::CommandExecutor;
use thunder_domain::value_objects::SqlValue;

/// Null executor that runs nothing
///
/// Commands affect no rows and scalar queries return `NULL`, so identity
/// retrieval through it fails with a database error instead of inventing ids.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use thunder_providers::{CommandExecutor, NullCommandExecutor};
///
/// let executor: Arc<dyn CommandExecutor> = Arc::new(NullCommandExecutor::new());
/// assert_eq!(executor.execute("DELETE FROM Cars", &[]).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCommandExecutor;

impl NullCommandExecutor {
    /// Create a new null executor
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for NullCommandExecutor {
    fn execute(&self, _command: &str, _params: &[SqlValue]) -> Result<u64> {
        Ok(0)
    }

    fn execute_scalar(&self, _command: &str, _params: &[SqlValue]) -> Result<SqlValue> {
        Ok(SqlValue::Null)
    }

    fn executor_name(&self) -> &str {
        "null"
    }
}
