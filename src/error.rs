use thiserror::Error;

pub type JetResult<T> = Result<T, JetError>;

#[derive(Error, Debug)]
pub enum JetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Required sheet \"{0}\" is missing.")]
    MissingSheet(String),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("Only .xlsm or .xlsx files are supported: {0}")]
    UnsupportedFile(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {total} workbooks could not be graded")]
    BatchFailed { failed: usize, total: usize },
}
