use std::result;
use log::SetLoggerError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("illegal state {0}")]
    IllegalState(String),

    #[error("logger error: {0}")]
    Logger(String),
}

impl From<SetLoggerError> for Error {
    fn from(value: SetLoggerError) -> Self {
        Error::Logger(value.to_string())
    }
}
