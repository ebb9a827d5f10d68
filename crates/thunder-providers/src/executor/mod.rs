//! Command Executor Implementations
//!
//! | Executor | Description |
//! |----------|-------------|
//! | [`NullCommandExecutor`] | No-op stub for testing |

pub mod null;

pub use null::NullCommandExecutor;
