//! Roll Entity
//!
//! The result of rolling a dice formula once.

use serde::{Deserialize, Serialize};

/// Outcome of a single roll
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollOutcome {
    /// Individual die results in draw order
    pub rolls: Vec<u32>,
    /// Sum of the individual results
    pub sum: u64,
    /// Modifier applied to the sum
    pub modifier: i64,
    /// `sum + modifier`
    pub total: i64,
}

impl RollOutcome {
    /// Build an outcome from individual draws and a modifier
    pub fn new(rolls: Vec<u32>, modifier: i64) -> Self {
        let sum: u64 = rolls.iter().map(|&r| u64::from(r)).sum();
        Self {
            rolls,
            sum,
            modifier,
            total: sum as i64 + modifier,
        }
    }
}
