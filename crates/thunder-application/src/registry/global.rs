//! Process-wide data provider registry
//!
//! One [`ProviderRegistry`] seeded with the linked built-in providers on first
//! use. Bindings and the custom resolver live for the rest of the process; tests
//! that touch them call [`reset_data_providers`] between scenarios.

use std::sync::{Arc, LazyLock};

use thunder_domain::error::Result;
use thunder_domain::ports::DataProvider;

use super::descriptor::{ProviderDescriptor, ProviderFactory};
use super::store::ProviderRegistry;
use crate::ports::registry::DataProviderConfig;

static DATA_PROVIDER_REGISTRY: LazyLock<ProviderRegistry> =
    LazyLock::new(ProviderRegistry::with_builtins);

/// The process-wide registry
pub fn data_provider_registry() -> &'static ProviderRegistry {
    &DATA_PROVIDER_REGISTRY
}

/// Resolve a data provider by identifier
///
/// # Returns
/// * `Ok(Arc<dyn DataProvider>)` - custom resolver result, or a new instance of the bound type
/// * `Err(Error::ProviderNotFound)` - no custom resolver and no binding for `identifier`
pub fn resolve_data_provider(identifier: &str) -> Result<Arc<dyn DataProvider>> {
    DATA_PROVIDER_REGISTRY.resolve(identifier)
}

/// Resolve `config.provider`, handing the whole config to the provider factory
pub fn resolve_data_provider_with(config: &DataProviderConfig) -> Result<Arc<dyn DataProvider>> {
    DATA_PROVIDER_REGISTRY.resolve_with(config)
}

/// Bind `identifier` to the implementation `T`
///
/// Idempotent for the same `T`; fails with `Error::ProviderConflict` when
/// `identifier` is bound to another type.
pub fn register_data_provider<T: ProviderFactory>(identifier: &str) -> Result<()> {
    DATA_PROVIDER_REGISTRY.register_type::<T>(identifier)
}

/// Bind `identifier` to an already built descriptor
pub fn register_data_provider_descriptor(
    identifier: &str,
    descriptor: ProviderDescriptor,
) -> Result<()> {
    DATA_PROVIDER_REGISTRY.register(identifier, descriptor)
}

/// Descriptor bound to `identifier`, if any
pub fn lookup_data_provider(identifier: &str) -> Option<ProviderDescriptor> {
    DATA_PROVIDER_REGISTRY.lookup(identifier)
}

/// Install the process-wide custom resolver
pub fn set_custom_resolver<F>(resolver: F)
where
    F: Fn(&str) -> Arc<dyn DataProvider> + Send + Sync + 'static,
{
    DATA_PROVIDER_REGISTRY.set_custom_resolver(resolver);
}

/// Remove the process-wide custom resolver; returns whether one was set
pub fn clear_custom_resolver() -> bool {
    DATA_PROVIDER_REGISTRY.clear_custom_resolver()
}

/// Whether a process-wide custom resolver is set
pub fn has_custom_resolver() -> bool {
    DATA_PROVIDER_REGISTRY.has_custom_resolver()
}

/// (identifier, implementation type name) pairs, sorted by identifier
pub fn list_data_providers() -> Vec<(String, &'static str)> {
    DATA_PROVIDER_REGISTRY.list()
}

/// Restore the process-wide registry to its initial state
pub fn reset_data_providers() {
    DATA_PROVIDER_REGISTRY.reset();
}
