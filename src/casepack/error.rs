use thiserror::Error;

#[derive(Error, Debug)]
pub enum CasepackError {
    #[error("test case {0} is out of range")]
    OutOfRange(usize),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, CasepackError>;
