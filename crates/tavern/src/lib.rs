//! Tavern Domain Library
//!
//! Core domain types and interfaces shared by the Tavern Discord bots.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure types and logic
//!   - `entities/`: Inbound messages and roll outcomes
//!   - `value_objects/`: Immutable value types (DiceFormula)
//!   - `services/`: Dice rolling, roll reports, reply chunking, addressing
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (chat completion)
//!
//! # Usage
//!
//! ```rust
//! use tavern::{roll, DiceFormula};
//!
//! let formula: DiceFormula = "2d6+3".parse().unwrap();
//! let outcome = roll(&formula, &mut rand::thread_rng());
//! assert_eq!(outcome.rolls.len(), 2);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    compose_reply, format_roll_report, resolve_addressing, roll, roll_with, split_message,
    Addressing, DiceFormula, DomainError, FormulaError, InboundMessage, RollOutcome,
    EMPTY_QUERY_PROMPT, LABEL_RESERVE, MAX_DICE, MAX_MESSAGE_LENGTH, MAX_MODIFIER, MAX_SIDES,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionProvider, CompletionResponse, MessageRole,
    TokenUsage,
};
