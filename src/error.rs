use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Keyword source error: {0}")]
    Source(String),

    #[error("Failed to parse keyword data: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Source-level failures can be skipped so one bad input doesn't sink a batch.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Error::Source(_) | Error::ParseError(_) | Error::Serialization(_) | Error::Io(_)
        )
    }
}
