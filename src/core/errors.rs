use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("backend error: {message}")]
    Backend { message: String },
    #[error("unexpected response format")]
    UnexpectedResponse,
    #[error("unknown course: {0}")]
    UnknownCourse(u64),
    #[error("unknown course directory: {0}")]
    UnknownDirectory(u64),
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("other error: {0}")]
    Other(String),
}
