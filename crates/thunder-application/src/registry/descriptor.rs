//! Provider implementation descriptors
//!
//! Registration binds an identifier to an implementation *type*, not to an
//! instance. A [`ProviderDescriptor`] captures the type's identity (for the
//! same-implementation check) and a factory that instantiates it on every
//! resolution.

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use thunder_domain::error::Result;
use thunder_domain::ports::DataProvider;

use crate::ports::registry::DataProviderConfig;

/// A data provider type that the registry can instantiate
pub trait ProviderFactory: DataProvider + Sized {
    /// Create a provider instance for `config`
    fn from_config(config: &DataProviderConfig) -> Result<Self>;
}

type FactoryFn = fn(&DataProviderConfig) -> Result<Arc<dyn DataProvider>>;

/// Identity and factory of one provider implementation
#[derive(Clone, Copy)]
pub struct ProviderDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    factory: FactoryFn,
}

impl ProviderDescriptor {
    /// Describe the implementation `T`
    pub fn of<T: ProviderFactory>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            factory: create_provider::<T>,
        }
    }

    /// Whether both descriptors describe the same implementation type
    pub fn same_implementation(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }

    /// Whether this descriptor describes `T`
    pub fn describes<T: ProviderFactory>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Fully qualified type name of the implementation
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name without its module path
    pub fn short_type_name(&self) -> &'static str {
        let base = self.type_name.split('<').next().unwrap_or(self.type_name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Instantiate the implementation
    pub fn create(&self, config: &DataProviderConfig) -> Result<Arc<dyn DataProvider>> {
        (self.factory)(config)
    }
}

impl PartialEq for ProviderDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.same_implementation(other)
    }
}

impl Eq for ProviderDescriptor {}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

fn create_provider<T: ProviderFactory>(
    config: &DataProviderConfig,
) -> Result<Arc<dyn DataProvider>> {
    Ok(Arc::new(T::from_config(config)?))
}
