use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Non-finite price: {0}")]
    NonFinite(f64),
    #[error("Price out of decimal range: {0}")]
    OutOfRange(f64),
    #[error("Fee schedule error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
