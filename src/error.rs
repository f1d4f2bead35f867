use thiserror::Error;
use time::error::IndeterminateOffset;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("failed to determine local UTC offset")]
    IndeterminateOffset(#[from] IndeterminateOffset),
    #[error("date arithmetic left the supported calendar range")]
    OutOfRange,
    #[error("unsupported locale: {0:?}")]
    UnknownLocale(String),
}
