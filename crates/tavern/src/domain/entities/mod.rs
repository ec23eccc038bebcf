//! Domain Entities
//!
//! Short-lived domain models produced per request.
//! - InboundMessage: Chat platform message
//! - RollOutcome: Dice roll result

mod message;
mod roll;

pub use message::*;
pub use roll::*;
