use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid phone number")]
    InvalidPhone { raw: String },
    #[error("phone number doesn't have matches")]
    NoMatch,
}
