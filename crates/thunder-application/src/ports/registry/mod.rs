//! Provider Registration System
//!
//! Defines the auto-registration infrastructure for built-in data providers.
//! Uses the `linkme` crate for compile-time registration; the runtime
//! [`ProviderRegistry`](crate::registry::ProviderRegistry) seeds itself from
//! the slice and accepts further registrations afterwards.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(DATA_PROVIDERS)]
//! │                        static ENTRY: DataProviderEntry = ...    │
//! │                              ↓                                  │
//! │  2. Registry seeds:    DATA_PROVIDERS.iter() → bindings         │
//! │                              ↓                                  │
//! │  3. Callers add:       register_data_provider::<T>("Custom.X")  │
//! │                              ↓                                  │
//! │  4. Resolver selects:  "System.Data.SqlClient" → SqlServer      │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a built-in provider (in thunder-providers)
//!
//! ```ignore
//! use thunder_application::ports::registry::{DataProviderEntry, DATA_PROVIDERS};
//! use thunder_application::registry::ProviderDescriptor;
//!
//! #[linkme::distributed_slice(DATA_PROVIDERS)]
//! static MYSQL_PROVIDER: DataProviderEntry = DataProviderEntry {
//!     name: "MySql.Data.MySqlClient",
//!     description: "MySQL data provider",
//!     descriptor: ProviderDescriptor::of::<MySqlProvider>,
//! };
//! ```

pub mod data_provider;

pub use data_provider::{
    DATA_PROVIDERS, DataProviderConfig, DataProviderEntry, list_builtin_data_providers,
};
