//! Data Provider Registry
//!
//! | Item | Description |
//! |------|-------------|
//! | [`ProviderDescriptor`] | Type-as-value description of an implementation |
//! | [`ProviderRegistry`] | Bindings plus the custom resolver slot |
//! | free functions | The process-wide registry every caller shares |

pub mod descriptor;
pub mod global;
pub mod store;

pub use descriptor::{ProviderDescriptor, ProviderFactory};
pub use global::{
    clear_custom_resolver, data_provider_registry, has_custom_resolver, list_data_providers,
    lookup_data_provider, register_data_provider, register_data_provider_descriptor,
    reset_data_providers, resolve_data_provider, resolve_data_provider_with, set_custom_resolver,
};
pub use store::{CustomResolver, ProviderRegistry};
