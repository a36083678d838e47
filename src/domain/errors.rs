use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Unknown message event name: {0}")]
    UnknownEventName(String),
}
