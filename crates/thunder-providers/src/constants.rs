//! Provider-specific constants

// ============================================================================
// SQL SERVER
// ============================================================================

/// SQL Server parameter prefix
pub const SQL_SERVER_PARAMETER_IDENTIFIER: &str = "@";

/// SQL Server quoted identifier template
pub const SQL_SERVER_FIELD_FORMAT: &str = "[{0}]";

/// Query returning the identity generated in the current scope
pub const SQL_SERVER_IDENTITY_QUERY: &str = "SELECT SCOPE_IDENTITY()";

// ============================================================================
// ORACLE
// ============================================================================

/// Oracle parameter prefix
pub const ORACLE_PARAMETER_IDENTIFIER: &str = ":";

/// Oracle quoted identifier template
pub const ORACLE_FIELD_FORMAT: &str = "\"{0}\"";

// ============================================================================
// MYSQL
// ============================================================================

/// MySQL parameter prefix
pub const MYSQL_PARAMETER_IDENTIFIER: &str = "?";

/// MySQL quoted identifier template
pub const MYSQL_FIELD_FORMAT: &str = "`{0}`";

/// Query returning the last auto-increment value of the connection
pub const MYSQL_IDENTITY_QUERY: &str = "SELECT LAST_INSERT_ID()";
