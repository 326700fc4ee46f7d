use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid {field}: {value:?} is not an integer")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("Badge MAC must not be empty")]
    EmptyMac,

    #[error("Timestamp {0} is outside the representable range")]
    InvalidTimestamp(i64),

    #[error("Timestamp fraction must be below 1000ms, got {0}")]
    InvalidFraction(u16),
}

pub type Result<T> = std::result::Result<T, Error>;
