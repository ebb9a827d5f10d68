//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`DataProvider`] | SQL dialect capability set selected by provider identifier |
//! | [`CommandExecutor`] | Connection runtime that actually runs commands |

/// Command execution port
pub mod command_executor;
/// Data provider port
pub mod data_provider;

pub use command_executor::CommandExecutor;
pub use data_provider::DataProvider;
