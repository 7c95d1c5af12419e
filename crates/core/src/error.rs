use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortsmithError {
    #[error("Invalid input: expected a JSON array of video records: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialize error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, ShortsmithError>;
