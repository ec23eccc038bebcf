//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod dice_formula;

pub use dice_formula::*;
