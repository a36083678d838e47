pub mod mappers;
pub mod requests;
pub mod responses;
pub mod validators;
