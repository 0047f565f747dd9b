/// Dictionary or stopword source failed to load. Non-fatal: the session
/// continues with an empty word list and the failure is reported.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Text extraction from the selected input failed. Word counts are reset
/// and the failure is surfaced, never propagated as a crash.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no input selected")]
    NoInput,

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
