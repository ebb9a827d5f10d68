//! Domain layer constants
//!
//! Identifiers of the built-in data providers. They mirror the client library
//! namespaces that connection settings use to name a database technology.

// ============================================================================
// BUILT-IN PROVIDER IDENTIFIERS
// ============================================================================

/// SQL Server client identifier
pub const SQL_SERVER_PROVIDER: &str = "System.Data.SqlClient";

/// Oracle client identifier
pub const ORACLE_PROVIDER: &str = "System.Data.OracleClient";

/// MySQL client identifier
pub const MYSQL_PROVIDER: &str = "MySql.Data.MySqlClient";

/// All built-in provider identifiers
pub const BUILTIN_PROVIDERS: [&str; 3] = [SQL_SERVER_PROVIDER, ORACLE_PROVIDER, MYSQL_PROVIDER];

/// Placeholder used by field format templates
pub const FIELD_PLACEHOLDER: &str = "{0}";
