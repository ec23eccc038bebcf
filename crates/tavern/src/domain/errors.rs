//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

use super::value_objects::FormulaError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid formula: {0}")]
    InvalidFormula(#[from] FormulaError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn missing_config<T: AsRef<str>>(names: &[T]) -> Self {
        let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        Self::Configuration(format!(
            "Missing required environment variables: {}",
            names.join(", ")
        ))
    }

    pub fn external<T: std::fmt::Display>(service: &str, err: T) -> Self {
        Self::ExternalService(format!("{} error: {}", service, err))
    }
}
