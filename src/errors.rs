use crate::commands::prepare::PrepareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Prepare(#[from] PrepareError),
    #[error("Invalid Argument: {0}")]
    Argument(String),
    #[error("Logger Error: {0}")]
    Logger(&'static str),
    #[error("Input stream ended before .exit")]
    EndOfInput,
}
