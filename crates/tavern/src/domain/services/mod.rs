//! Domain Services
//!
//! Stateless operations over domain types.

mod addressing;
mod chunking;
mod dice;
mod roll_report;

pub use addressing::*;
pub use chunking::*;
pub use dice::*;
pub use roll_report::*;
