use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{file}:{line}: {message}")]
    Parse {
        file: String,
        line: u64,
        message: String,
    },

    #[error("{file}:{line}: position {value:?} is not an integer")]
    InvalidPosition {
        file: String,
        line: u64,
        value: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
