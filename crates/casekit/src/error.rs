use casekit_core::case::CaseError;

#[derive(thiserror::Error, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("Invalid JSON input on line {line}: {message}")]
    InvalidJson { line: usize, message: String },

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("Failed to read stdin: {0}")]
    Stdin(String),

    #[error("{failed} of {total} inputs could not be converted")]
    PartialFailure { failed: usize, total: usize },
}

impl From<CaseError> for Error {
    fn from(err: CaseError) -> Self {
        Error::Conversion(err.to_string())
    }
}
