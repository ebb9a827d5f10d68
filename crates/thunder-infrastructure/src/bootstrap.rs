//! Process bootstrap
//!
//! Loads configuration, installs logging and applies the registry section to the
//! process-wide data provider registry.

use std::collections::BTreeMap;
use std::path::Path;

use thunder_application::{ProviderDescriptor, ProviderRegistry, data_provider_registry};
use thunder_domain::error::{Error, Result};
use tracing::{debug, info};

use crate::config::{AppConfig, ConfigLoader, RegistryConfig};
use crate::logging::init_logging;

/// Bind every configured alias to its target's implementation
///
/// Aliases may target other aliases. Every alias is checked before any is
/// bound, so a failing config leaves the registry untouched: an alias whose
/// target chain never reaches a bound identifier fails with
/// `Error::ProviderNotFound` naming the last identifier in the chain, and an
/// alias already bound to a different implementation fails with
/// `Error::ProviderConflict`. Re-applying the same config is a no-op.
pub fn apply_registry_config(registry: &ProviderRegistry, config: &RegistryConfig) -> Result<()> {
    let planned = plan_aliases(registry, &config.aliases)?;

    for (alias, descriptor) in planned {
        registry.register(alias, descriptor)?;
        debug!(alias, implementation = descriptor.type_name(), "Applied data provider alias");
    }

    Ok(())
}

fn plan_aliases<'a>(
    registry: &ProviderRegistry,
    aliases: &'a BTreeMap<String, String>,
) -> Result<Vec<(&'a str, ProviderDescriptor)>> {
    let mut planned = Vec::with_capacity(aliases.len());

    for (alias, target) in aliases {
        if alias.is_empty() || target.is_empty() {
            return Err(Error::configuration(format!(
                "Registry alias '{alias}' -> '{target}' has an empty identifier"
            )));
        }

        let descriptor = alias_target(registry, aliases, target)?;
        if let Some(existing) = registry.lookup(alias)
            && !existing.same_implementation(&descriptor)
        {
            return Err(Error::provider_conflict(
                alias.as_str(),
                existing.type_name(),
                descriptor.type_name(),
            ));
        }
        planned.push((alias.as_str(), descriptor));
    }

    Ok(planned)
}

/// Follow `target` through the alias map until it reaches a bound identifier
fn alias_target(
    registry: &ProviderRegistry,
    aliases: &BTreeMap<String, String>,
    target: &str,
) -> Result<ProviderDescriptor> {
    let mut current = target;
    // A chain longer than the map itself is a cycle
    for _ in 0..=aliases.len() {
        if let Some(descriptor) = registry.lookup(current) {
            return Ok(descriptor);
        }
        match aliases.get(current) {
            Some(next) => current = next.as_str(),
            None => break,
        }
    }
    Err(Error::provider_not_found(current))
}

/// Apply `config` to the process-wide registry and return it
pub fn bootstrap_registry(config: &AppConfig) -> Result<&'static ProviderRegistry> {
    let registry = data_provider_registry();
    apply_registry_config(registry, &config.registry)?;
    info!(
        providers = registry.identifiers().len(),
        aliases = config.registry.aliases.len(),
        "Data provider registry ready"
    );
    Ok(registry)
}

/// Load configuration, install logging and prepare the registry
///
/// Fails if a global tracing subscriber is already installed.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;
    bootstrap_registry(&config)?;
    Ok(config)
}
