//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RegistryConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Data provider registry configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}
