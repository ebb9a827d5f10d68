//! Application Layer - Thunder
//!
//! Owns the data provider registry: the process-wide mapping from provider
//! identifier to implementation, the custom resolver slot that overrides it,
//! and the resolution algorithm tying the two together.
//!
//! ## Resolution
//!
//! ```text
//! resolve("MySql.Data.MySqlClient")
//!        │
//!        ├── custom resolver set? ──yes──▶ resolver(identifier)
//!        │
//!        └── registry lookup ──found──▶ descriptor.create(config)
//!                     │
//!                     └──missing──▶ Error::ProviderNotFound
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `thunder-domain`: For the provider ports and error type
//! - `linkme`: For compile-time registration of built-in providers

pub mod ports;
pub mod registry;

pub use ports::registry::{
    DATA_PROVIDERS, DataProviderConfig, DataProviderEntry, list_builtin_data_providers,
};
pub use registry::{
    CustomResolver, ProviderDescriptor, ProviderFactory, ProviderRegistry, clear_custom_resolver,
    data_provider_registry, has_custom_resolver, list_data_providers, lookup_data_provider,
    register_data_provider, register_data_provider_descriptor, reset_data_providers,
    resolve_data_provider, resolve_data_provider_with, set_custom_resolver,
};
