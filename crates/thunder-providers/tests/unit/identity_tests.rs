//! Identity retrieval through a command executor

use std::sync::{Arc, Mutex};

use thunder_application::{DataProviderConfig, ProviderRegistry};
use thunder_domain::error::{Error, Result};
use thunder_domain::value_objects::SqlValue;
use thunder_providers::{CommandExecutor, NullCommandExecutor};

/// Executor answering every scalar query with a fixed value
struct ScriptedExecutor {
    scalar: SqlValue,
    batches: Mutex<Vec<String>>,
}

impl ScriptedExecutor {
    fn returning(scalar: impl Into<SqlValue>) -> Arc<Self> {
        Arc::new(Self {
            scalar: scalar.into(),
            batches: Mutex::new(Vec::new()),
        })
    }

    fn last_batch(&self) -> Option<String> {
        self.batches.lock().ok()?.last().cloned()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, command: &str, _params: &[SqlValue]) -> Result<u64> {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(command.to_string());
        }
        Ok(1)
    }

    fn execute_scalar(&self, command: &str, _params: &[SqlValue]) -> Result<SqlValue> {
        if let Ok(mut batches) = self.batches.lock() {
            batches.push(command.to_string());
        }
        Ok(self.scalar.clone())
    }
}

const INSERT: &str = "INSERT INTO Cars (Name) VALUES (@Name);";

#[test]
fn test_sql_server_identity() {
    let registry = ProviderRegistry::with_builtins();
    let executor = ScriptedExecutor::returning(17_i64);
    let config = DataProviderConfig::new("System.Data.SqlClient").with_executor(executor.clone());

    let provider = registry.resolve_with(&config).expect("resolves");
    let id = provider
        .execute_get_identity(INSERT, &[SqlValue::from("Beetle")])
        .expect("identity");

    assert_eq!(id, 17);
    assert_eq!(
        executor.last_batch().as_deref(),
        Some("INSERT INTO Cars (Name) VALUES (@Name); SELECT SCOPE_IDENTITY()")
    );
}

#[test]
fn test_mysql_identity_from_float_scalar() {
    let registry = ProviderRegistry::with_builtins();
    let executor = ScriptedExecutor::returning(SqlValue::Float(8.0));
    let config = DataProviderConfig::new("MySql.Data.MySqlClient").with_executor(executor.clone());

    let provider = registry.resolve_with(&config).expect("resolves");
    assert_eq!(provider.execute_get_identity("INSERT INTO Cars () VALUES ()", &[]).ok(), Some(8));
    assert_eq!(
        executor.last_batch().as_deref(),
        Some("INSERT INTO Cars () VALUES (); SELECT LAST_INSERT_ID()")
    );
}

#[test]
fn test_oracle_identity_is_unsupported() {
    let registry = ProviderRegistry::with_builtins();
    let executor = ScriptedExecutor::returning(1_i64);
    let config =
        DataProviderConfig::new("System.Data.OracleClient").with_executor(executor.clone());

    let provider = registry.resolve_with(&config).expect("resolves");
    let err = provider
        .execute_get_identity(INSERT, &[])
        .expect_err("no identity batch for Oracle");
    assert!(matches!(err, Error::Unsupported { .. }));
    assert!(executor.last_batch().is_none());
}

#[test]
fn test_identity_without_executor() {
    let registry = ProviderRegistry::with_builtins();
    let provider = registry.resolve("System.Data.SqlClient").expect("resolves");

    let err = provider.execute_get_identity(INSERT, &[]).expect_err("no executor");
    assert!(matches!(err, Error::NotConnected { .. }));
}

#[test]
fn test_null_executor_yields_database_error() {
    let registry = ProviderRegistry::with_builtins();
    let config = DataProviderConfig::new("MySql.Data.MySqlClient")
        .with_executor(Arc::new(NullCommandExecutor::new()));

    let provider = registry.resolve_with(&config).expect("resolves");
    let err = provider.execute_get_identity(INSERT, &[]).expect_err("NULL identity");
    assert!(matches!(err, Error::Database { .. }));
}

#[test]
fn test_out_of_range_identity_is_database_error() {
    let registry = ProviderRegistry::with_builtins();
    let executor = ScriptedExecutor::returning(SqlValue::Float(1e30));
    let config = DataProviderConfig::new("System.Data.SqlClient").with_executor(executor);

    let provider = registry.resolve_with(&config).expect("resolves");
    let err = provider
        .execute_get_identity(INSERT, &[])
        .expect_err("identity does not fit in i64");
    assert!(matches!(err, Error::Database { .. }));
}
