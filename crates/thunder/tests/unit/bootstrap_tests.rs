//! Bootstrapping the registry from a configuration file

use std::io::Write;

use serial_test::serial;
use thunder::infrastructure::bootstrap_registry;
use thunder::{ConfigLoader, SqlServerProvider, reset_data_providers, resolve_provider};

#[test]
#[serial]
fn test_configured_alias_resolves_to_target() {
    reset_data_providers();
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[registry.aliases]\n\"Microsoft.Data.SqlClient\" = \"System.Data.SqlClient\""
    )
    .expect("write config");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("config loads");
    bootstrap_registry(&config).expect("registry bootstrapped");

    let provider = resolve_provider("Microsoft.Data.SqlClient").expect("alias resolves");
    assert!(provider.is::<SqlServerProvider>());

    reset_data_providers();
}
