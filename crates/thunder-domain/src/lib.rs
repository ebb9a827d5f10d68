//! # Domain Layer
//!
//! Core types shared by every Thunder crate: the data provider port, the command
//! executor port, the error type and the SQL value object passed as command
//! parameters.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Built-in provider identifiers |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`ports`] | `DataProvider` and `CommandExecutor` traits |
//! | [`value_objects`] | `SqlValue` command parameters and scalars |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{CommandExecutor, DataProvider};
pub use value_objects::SqlValue;
