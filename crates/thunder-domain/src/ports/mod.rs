//! Domain Port Interfaces
//!
//! Contracts implemented by the provider crate and consumed by the registry.
//!
//! - **providers/** - the data provider capability set and the command executor
//!   it delegates execution to

/// External service provider ports
pub mod providers;

pub use providers::{CommandExecutor, DataProvider};
