//! Application Layer (Use Cases)

mod relay_service;

pub use relay_service::{RelayService, RelaySettings};
