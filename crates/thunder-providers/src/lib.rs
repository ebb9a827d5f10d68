//! # Thunder - Built-in Data Providers
//!
//! SQL dialect implementations of the `DataProvider` port defined in
//! `thunder-domain`. Each provider registers itself into the
//! `DATA_PROVIDERS` slice of `thunder-application`, so linking this crate is
//! enough to seed the registry with it.
//!
//! ## Providers
//!
//! | Identifier | Provider | Parameters | Fields | Take |
//! |------------|----------|------------|--------|------|
//! | `System.Data.SqlClient` | [`SqlServerProvider`] | `@` | `[{0}]` | `TOP n` |
//! | `System.Data.OracleClient` | [`OracleProvider`] | `:` | `"{0}"` | `ROWNUM <= n` |
//! | `MySql.Data.MySqlClient` | [`MySqlProvider`] | `?` | `` `{0}` `` | `LIMIT n` |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! thunder-providers = { version = "0.1", default-features = false, features = ["provider-mysql"] }
//! ```

// Re-export thunder-domain types commonly used with providers
pub use thunder_domain::error::{Error, Result};
pub use thunder_domain::ports::{CommandExecutor, DataProvider};

/// Provider-specific constants
pub mod constants;

/// Command executor implementations
pub mod executor;

/// SQL dialect provider implementations
pub mod sql;

pub use executor::NullCommandExecutor;
#[cfg(feature = "provider-mysql")]
pub use sql::MySqlProvider;
#[cfg(feature = "provider-oracle")]
pub use sql::OracleProvider;
#[cfg(feature = "provider-sqlserver")]
pub use sql::SqlServerProvider;
