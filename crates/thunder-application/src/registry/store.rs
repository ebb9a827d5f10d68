//! Provider registry storage
//!
//! [`ProviderRegistry`] keeps the identifier → implementation bindings and the
//! custom resolver slot behind a single `RwLock`, so registration and resolver
//! assignment are exclusive with each other and with lookups, while lookups run
//! concurrently.
//!
//! Neither the custom resolver nor a provider factory is ever invoked with the
//! lock held; both may call back into the registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thunder_domain::error::{Error, Result};
use thunder_domain::ports::DataProvider;
use tracing::{debug, error, info, warn};

use super::descriptor::{ProviderDescriptor, ProviderFactory};
use crate::ports::registry::{DATA_PROVIDERS, DataProviderConfig};

/// Override that replaces registry lookup for every identifier
pub type CustomResolver = dyn Fn(&str) -> Arc<dyn DataProvider> + Send + Sync;

#[derive(Default)]
struct RegistryState {
    bindings: HashMap<String, ProviderDescriptor>,
    custom_resolver: Option<Arc<CustomResolver>>,
}

impl RegistryState {
    fn bind(&mut self, identifier: &str, descriptor: ProviderDescriptor) -> Result<bool> {
        match self.bindings.get(identifier) {
            Some(existing) if existing.same_implementation(&descriptor) => Ok(false),
            Some(existing) => Err(Error::provider_conflict(
                identifier,
                existing.type_name(),
                descriptor.type_name(),
            )),
            None => {
                self.bindings.insert(identifier.to_string(), descriptor);
                Ok(true)
            }
        }
    }

    fn seed_builtins(&mut self) {
        for entry in DATA_PROVIDERS {
            if let Err(e) = self.bind(entry.name, (entry.descriptor)()) {
                error!(
                    provider = entry.name,
                    error = %e,
                    "Built-in data provider collides with another built-in"
                );
            }
        }
    }
}

/// Identifier → implementation bindings plus the custom resolver slot
pub struct ProviderRegistry {
    state: RwLock<RegistryState>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Create a registry seeded with every linked built-in provider
    pub fn with_builtins() -> Self {
        let mut state = RegistryState::default();
        state.seed_builtins();
        debug!(count = state.bindings.len(), "Seeded built-in data providers");
        Self {
            state: RwLock::new(state),
        }
    }

    // Every write is a single insert or slot swap, so a poisoned lock still
    // guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bind `identifier` to `descriptor`
    ///
    /// Re-registering the implementation already bound is a no-op. Binding a
    /// different implementation fails with [`Error::ProviderConflict`]; built-in
    /// identifiers get no special treatment.
    pub fn register(&self, identifier: &str, descriptor: ProviderDescriptor) -> Result<()> {
        let outcome = self.write().bind(identifier, descriptor);
        match &outcome {
            Ok(true) => info!(
                provider = identifier,
                implementation = descriptor.type_name(),
                "Registered data provider"
            ),
            Ok(false) => debug!(provider = identifier, "Data provider already registered"),
            Err(e) => {
                warn!(provider = identifier, error = %e, "Rejected data provider registration");
            }
        }
        outcome.map(|_| ())
    }

    /// Bind `identifier` to the implementation `T`
    pub fn register_type<T: ProviderFactory>(&self, identifier: &str) -> Result<()> {
        self.register(identifier, ProviderDescriptor::of::<T>())
    }

    /// Descriptor bound to `identifier`, if any
    pub fn lookup(&self, identifier: &str) -> Option<ProviderDescriptor> {
        self.read().bindings.get(identifier).copied()
    }

    /// Whether `identifier` has a binding
    pub fn contains(&self, identifier: &str) -> bool {
        self.read().bindings.contains_key(identifier)
    }

    /// Resolve `identifier` with a default configuration
    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn DataProvider>> {
        self.resolve_with(&DataProviderConfig::new(identifier))
    }

    /// Resolve `config.provider`
    ///
    /// A custom resolver, when set, answers for every identifier and the
    /// bindings are not consulted. Otherwise the bound implementation is
    /// instantiated, or [`Error::ProviderNotFound`] carries the identifier
    /// exactly as requested.
    pub fn resolve_with(&self, config: &DataProviderConfig) -> Result<Arc<dyn DataProvider>> {
        let identifier = config.provider.as_str();
        let (custom_resolver, descriptor) = {
            let state = self.read();
            match &state.custom_resolver {
                Some(resolver) => (Some(Arc::clone(resolver)), None),
                None => (None, state.bindings.get(identifier).copied()),
            }
        };

        if let Some(resolver) = custom_resolver {
            debug!(provider = identifier, "Resolving data provider through custom resolver");
            return Ok(resolver(identifier));
        }

        match descriptor {
            Some(descriptor) => {
                debug!(
                    provider = identifier,
                    implementation = descriptor.type_name(),
                    "Resolving data provider"
                );
                descriptor.create(config)
            }
            None => {
                debug!(
                    provider = identifier,
                    available = ?self.identifiers(),
                    "Unknown data provider"
                );
                Err(Error::provider_not_found(identifier))
            }
        }
    }

    /// Install a custom resolver, replacing any previous one
    pub fn set_custom_resolver<F>(&self, resolver: F)
    where
        F: Fn(&str) -> Arc<dyn DataProvider> + Send + Sync + 'static,
    {
        self.write().custom_resolver = Some(Arc::new(resolver));
        info!("Custom data provider resolver installed");
    }

    /// Remove the custom resolver; returns whether one was set
    pub fn clear_custom_resolver(&self) -> bool {
        let cleared = self.write().custom_resolver.take().is_some();
        if cleared {
            info!("Custom data provider resolver cleared");
        }
        cleared
    }

    /// Whether a custom resolver is set
    pub fn has_custom_resolver(&self) -> bool {
        self.read().custom_resolver.is_some()
    }

    /// Bound identifiers, sorted
    pub fn identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self.read().bindings.keys().cloned().collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// (identifier, implementation type name) pairs, sorted by identifier
    pub fn list(&self) -> Vec<(String, &'static str)> {
        let mut providers: Vec<(String, &'static str)> = self
            .read()
            .bindings
            .iter()
            .map(|(identifier, descriptor)| (identifier.clone(), descriptor.type_name()))
            .collect();
        providers.sort_unstable();
        providers
    }

    /// Drop user-added bindings and the custom resolver, then re-seed built-ins
    pub fn reset(&self) {
        let mut state = self.write();
        *state = RegistryState::default();
        state.seed_builtins();
        info!(count = state.bindings.len(), "Data provider registry reset");
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("ProviderRegistry")
            .field("bindings", &state.bindings)
            .field("custom_resolver", &state.custom_resolver.is_some())
            .finish()
    }
}
