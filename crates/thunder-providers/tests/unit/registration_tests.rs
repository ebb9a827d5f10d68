//! Built-in providers resolved through the registry

use thunder_application::{
    ProviderRegistry, list_builtin_data_providers, reset_data_providers, resolve_data_provider,
};
use thunder_domain::constants::BUILTIN_PROVIDERS;
use thunder_providers::{DataProvider, MySqlProvider, OracleProvider, SqlServerProvider};

#[test]
fn test_every_builtin_is_registered() {
    let registered: Vec<&str> = list_builtin_data_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    for identifier in BUILTIN_PROVIDERS {
        assert!(
            registered.contains(&identifier),
            "{identifier} missing from {registered:?}"
        );
    }
}

#[test]
fn test_builtin_descriptors_are_distinct() {
    let registry = ProviderRegistry::with_builtins();
    let descriptors: Vec<_> = BUILTIN_PROVIDERS
        .iter()
        .map(|identifier| registry.lookup(identifier).expect("built-in bound"))
        .collect();

    assert!(!descriptors[0].same_implementation(&descriptors[1]));
    assert!(!descriptors[1].same_implementation(&descriptors[2]));
    assert!(!descriptors[0].same_implementation(&descriptors[2]));
}

#[test]
#[serial_test::serial]
fn test_builtin_dialects() {
    reset_data_providers();
    let cases: [(&str, &str, &str, &str); 3] = [
        (
            "System.Data.SqlClient",
            "@Id",
            "[Name]",
            "SELECT TOP 10 * FROM Cars",
        ),
        (
            "System.Data.OracleClient",
            ":Id",
            "\"Name\"",
            "SELECT * FROM (SELECT * FROM Cars) WHERE ROWNUM <= 10",
        ),
        (
            "MySql.Data.MySqlClient",
            "?Id",
            "`Name`",
            "SELECT * FROM Cars LIMIT 10",
        ),
    ];

    for (identifier, parameter, field, take) in cases {
        let provider = resolve_data_provider(identifier).expect("built-in resolves");
        assert_eq!(provider.format_parameter("Id"), parameter, "{identifier}");
        assert_eq!(provider.format_field("Name"), field, "{identifier}");
        assert_eq!(provider.select_take_query("*", "FROM Cars", 10), take, "{identifier}");
        assert_eq!(
            provider.select_all_query("*", "FROM Cars"),
            "SELECT * FROM Cars",
            "{identifier}"
        );
    }
}

#[test]
#[serial_test::serial]
fn test_resolved_types() {
    reset_data_providers();
    let sql_server = resolve_data_provider("System.Data.SqlClient").expect("resolves");
    let oracle = resolve_data_provider("System.Data.OracleClient").expect("resolves");
    let mysql = resolve_data_provider("MySql.Data.MySqlClient").expect("resolves");

    assert!(sql_server.is::<SqlServerProvider>());
    assert!(oracle.is::<OracleProvider>());
    assert!(mysql.is::<MySqlProvider>());
    assert_eq!(mysql.provider_name(), "mysql");
}
