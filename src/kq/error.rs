use thiserror::Error;

#[derive(Error, Debug)]
pub enum KqError {
    #[error("kubectl failed: {0}")]
    Kubectl(String),

    #[error("Timeout after {0}s waiting for kubectl")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KqError>;
