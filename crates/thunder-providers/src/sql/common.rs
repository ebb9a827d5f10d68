//! Helpers shared by the SQL dialect providers

use std::sync::Arc;

use thunder_domain::error::{Error, Result};
use thunder_domain::ports::CommandExecutor;
use thunder_domain::value_objects::SqlValue;
use tracing::debug;

/// Join the non-empty parts of a statement with single spaces
pub(crate) fn compose(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `command` followed by `identity_query` as one batch and read the identity
pub(crate) fn fetch_identity(
    provider: &str,
    executor: Option<&Arc<dyn CommandExecutor>>,
    command: &str,
    identity_query: &str,
    params: &[SqlValue],
) -> Result<i64> {
    let executor = executor.ok_or_else(|| Error::not_connected(provider))?;
    let batch = format!(
        "{}; {identity_query}",
        command.trim().trim_end_matches(';').trim_end()
    );
    debug!(
        provider,
        executor = executor.executor_name(),
        command = %batch,
        "Executing identity command"
    );

    let value = executor.execute_scalar(&batch, params)?;
    value.as_i64().ok_or_else(|| {
        Error::database(format!(
            "{provider} returned a {} value instead of a generated identity",
            value.kind()
        ))
    })
}
