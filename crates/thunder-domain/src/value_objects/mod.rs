//! Domain Value Objects
//!
//! Immutable values passed across the provider boundary.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SqlValue`] | Command parameter or scalar result |

/// SQL parameter and scalar values
pub mod sql_value;

pub use sql_value::SqlValue;
