//! Request validation for the SMS gateway message endpoints.
//!
//! Handlers bind a request DTO from [`presentation::http::requests`], run the
//! matching [`MessageHandlerValidator`] method and, when the returned
//! [`FieldErrors`] is non-empty, answer with a
//! [`presentation::http::responses::ValidationFailedResponse`].

pub mod config;
pub mod domain;
pub mod presentation;

pub use config::{ConfigError, ValidatorConfig};
pub use presentation::http::validators::{FieldErrors, MessageHandlerValidator};
