mod field_errors;
mod message_handler;
pub mod rules;

pub use field_errors::FieldErrors;
pub use message_handler::MessageHandlerValidator;
