//! SQL Dialect Providers
//!
//! ## Available Providers
//!
//! | Provider | Identifier | Description |
//! |----------|------------|-------------|
//! | [`SqlServerProvider`] | `System.Data.SqlClient` | Microsoft SQL Server |
//! | [`OracleProvider`] | `System.Data.OracleClient` | Oracle Database |
//! | [`MySqlProvider`] | `MySql.Data.MySqlClient` | MySQL / MariaDB |

#[cfg(any(
    feature = "provider-sqlserver",
    feature = "provider-oracle",
    feature = "provider-mysql"
))]
mod common;

#[cfg(feature = "provider-mysql")]
pub mod mysql;
#[cfg(feature = "provider-oracle")]
pub mod oracle;
#[cfg(feature = "provider-sqlserver")]
pub mod sql_server;

#[cfg(feature = "provider-mysql")]
pub use mysql::MySqlProvider;
#[cfg(feature = "provider-oracle")]
pub use oracle::OracleProvider;
#[cfg(feature = "provider-sqlserver")]
pub use sql_server::SqlServerProvider;
