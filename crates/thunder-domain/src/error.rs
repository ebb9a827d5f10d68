//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Thunder
#[derive(Error, Debug)]
pub enum Error {
    /// No binding exists for the requested provider identifier
    #[error("Data provider not found for identifier '{identifier}'")]
    ProviderNotFound {
        /// The identifier exactly as it was requested
        identifier: String,
    },

    /// The identifier is already bound to a different implementation
    #[error("Data provider '{identifier}' is bound to {existing}, cannot register {requested}")]
    ProviderConflict {
        /// The contested identifier
        identifier: String,
        /// Type name of the implementation currently bound
        existing: String,
        /// Type name of the implementation that was rejected
        requested: String,
    },

    /// The provider has no command executor to run commands with
    #[error("Data provider '{provider}' has no command executor bound")]
    NotConnected {
        /// Name of the provider
        provider: String,
    },

    /// The provider's dialect cannot perform the operation
    #[error("Data provider '{provider}' does not support {operation}")]
    Unsupported {
        /// Name of the provider
        provider: String,
        /// Operation that was attempted
        operation: String,
    },

    /// Command execution error reported by an executor
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Registry error creation methods
impl Error {
    /// Create a provider not found error
    pub fn provider_not_found<S: Into<String>>(identifier: S) -> Self {
        Self::ProviderNotFound {
            identifier: identifier.into(),
        }
    }

    /// Create a provider conflict error
    pub fn provider_conflict<S, E, R>(identifier: S, existing: E, requested: R) -> Self
    where
        S: Into<String>,
        E: Into<String>,
        R: Into<String>,
    {
        Self::ProviderConflict {
            identifier: identifier.into(),
            existing: existing.into(),
            requested: requested.into(),
        }
    }

    /// Whether this is a provider not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProviderNotFound { .. })
    }

    /// Whether this is a provider conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ProviderConflict { .. })
    }
}

// Provider capability error creation methods
impl Error {
    /// Create a not connected error
    pub fn not_connected<S: Into<String>>(provider: S) -> Self {
        Self::NotConnected {
            provider: provider.into(),
        }
    }

    /// Create an unsupported operation error
    pub fn unsupported<P: Into<String>, O: Into<String>>(provider: P, operation: O) -> Self {
        Self::Unsupported {
            provider: provider.into(),
            operation: operation.into(),
        }
    }

    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }
}

// General error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
