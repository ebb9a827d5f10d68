//! End-to-end resolution and registration through the public API

use std::sync::Arc;

use serial_test::serial;
use thunder::{
    DataProvider, DataProviderConfig, Error, MySqlProvider, OracleProvider, ProviderFactory,
    Result, SqlServerProvider, SqlValue, clear_custom_resolver, register_provider,
    reset_data_providers, resolve_provider, set_custom_resolver,
};

/// Add-on dialect registered at runtime
#[derive(Debug)]
struct CustomProvider;

impl DataProvider for CustomProvider {
    fn parameter_identifier(&self) -> &str {
        "@"
    }

    fn field_format(&self) -> &str {
        "\"{0}\""
    }

    fn select_all_query(&self, projection: &str, where_clause: &str) -> String {
        format!("SELECT {projection} {where_clause}")
    }

    fn select_take_query(&self, projection: &str, where_clause: &str, count: usize) -> String {
        format!("SELECT {projection} {where_clause} LIMIT {count}")
    }

    fn execute_get_identity(&self, _command: &str, _params: &[SqlValue]) -> Result<i64> {
        Ok(1)
    }

    fn provider_name(&self) -> &str {
        "custom"
    }
}

impl ProviderFactory for CustomProvider {
    fn from_config(_config: &DataProviderConfig) -> Result<Self> {
        Ok(Self)
    }
}

/// Unrelated implementation used to provoke conflicts
#[derive(Debug)]
struct OtherProvider;

impl DataProvider for OtherProvider {
    fn parameter_identifier(&self) -> &str {
        ":"
    }

    fn field_format(&self) -> &str {
        "{0}"
    }

    fn select_all_query(&self, projection: &str, where_clause: &str) -> String {
        format!("SELECT {projection} {where_clause}")
    }

    fn select_take_query(&self, projection: &str, where_clause: &str, count: usize) -> String {
        format!("SELECT {projection} {where_clause} LIMIT {count}")
    }

    fn execute_get_identity(&self, _command: &str, _params: &[SqlValue]) -> Result<i64> {
        Ok(2)
    }

    fn provider_name(&self) -> &str {
        "other"
    }
}

impl ProviderFactory for OtherProvider {
    fn from_config(_config: &DataProviderConfig) -> Result<Self> {
        Ok(Self)
    }
}

#[test]
#[serial]
fn test_sql_provider() {
    reset_data_providers();
    let provider = resolve_provider("System.Data.SqlClient").expect("built-in resolves");
    assert!(provider.is::<SqlServerProvider>());
}

#[test]
#[serial]
fn test_oracle_provider() {
    reset_data_providers();
    let provider = resolve_provider("System.Data.OracleClient").expect("built-in resolves");
    assert!(provider.is::<OracleProvider>());
}

#[test]
#[serial]
fn test_mysql_provider() {
    reset_data_providers();
    let provider = resolve_provider("MySql.Data.MySqlClient").expect("built-in resolves");
    assert!(provider.is::<MySqlProvider>());
}

#[test]
#[serial]
fn test_invalid_provider() {
    reset_data_providers();
    for identifier in ["Invalid.Provider", "Another.Crazy.Provider"] {
        match resolve_provider(identifier) {
            Err(err @ Error::ProviderNotFound { .. }) => {
                assert!(
                    err.to_string().contains(identifier),
                    "message should name {identifier}: {err}"
                );
            }
            Err(other) => panic!("expected ProviderNotFound, got {other}"),
            Ok(_) => panic!("{identifier} should not resolve"),
        }
    }
}

#[test]
#[serial]
fn test_custom_provider_hook() {
    reset_data_providers();
    let stub: Arc<dyn DataProvider> = Arc::new(CustomProvider);
    let hooked = Arc::clone(&stub);
    set_custom_resolver(move |_| Arc::clone(&hooked));

    let provider = resolve_provider("Any.Provider").expect("hook answers");
    assert!(Arc::ptr_eq(&provider, &stub));

    let provider = resolve_provider("System.Data.SqlClient").expect("hook answers");
    assert!(Arc::ptr_eq(&provider, &stub));

    reset_data_providers();
}

#[test]
#[serial]
fn test_clearing_hook_falls_back_to_registry() {
    reset_data_providers();
    set_custom_resolver(|_| Arc::new(CustomProvider));
    assert!(clear_custom_resolver());

    let provider = resolve_provider("System.Data.SqlClient").expect("built-in resolves");
    assert!(provider.is::<SqlServerProvider>());
    assert!(resolve_provider("Any.Provider").is_err());
}

#[test]
#[serial]
fn test_add_provider() {
    reset_data_providers();
    register_provider::<CustomProvider>("Custom.Provider").expect("registered");

    let provider = resolve_provider("Custom.Provider").expect("registered type resolves");
    assert!(provider.is::<CustomProvider>());

    reset_data_providers();
}

#[test]
#[serial]
fn test_add_same_provider_twice() {
    reset_data_providers();
    register_provider::<CustomProvider>("Custom.Provider").expect("first registration");
    register_provider::<CustomProvider>("Custom.Provider").expect("second registration");

    reset_data_providers();
}

#[test]
#[serial]
fn test_add_conflicting_provider() {
    reset_data_providers();
    register_provider::<CustomProvider>("Custom.Provider").expect("first registration");

    let result = register_provider::<OtherProvider>("Custom.Provider");
    assert!(matches!(result, Err(Error::ProviderConflict { .. })));

    reset_data_providers();
}

#[test]
#[serial]
fn test_concurrent_resolution_during_registration() {
    reset_data_providers();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || -> Result<()> {
                let identifier = format!("Custom.Provider.{}", i % 2);
                register_provider::<CustomProvider>(&identifier)?;
                let provider = resolve_provider("MySql.Data.MySqlClient")?;
                assert!(provider.is::<MySqlProvider>());
                let provider = resolve_provider(&identifier)?;
                assert!(provider.is::<CustomProvider>());
                Ok(())
            })
        })
        .collect();

    for handle in handles {
        handle
            .join()
            .expect("worker finished")
            .expect("no registry errors");
    }

    reset_data_providers();
}
