#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("invalid activity level \"{0}\", expected one of: {1}")]
    InvalidActivityLevel(String, String),
    #[error("invalid gender \"{0}\", expected one of: {1}")]
    InvalidGender(String, String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
