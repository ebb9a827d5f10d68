//! Application ports
//!
//! - `registry::*`: compile-time provider registration slice and provider configuration

pub mod registry;
