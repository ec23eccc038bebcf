//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

mod deepseek;

pub use deepseek::{DeepSeekProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
