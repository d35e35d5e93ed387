use crate::domain::constraints::Violation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {}", describe(.0))]
    Validation(Vec<Violation>),
    #[error("Business error: {0}")]
    Business(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssetError {
    pub fn business(message: impl Into<String>) -> Self {
        Self::Business(message.into())
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, AssetError>;
