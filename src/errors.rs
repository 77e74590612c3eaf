use axum::http::StatusCode;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

/// Failures while re-reading the submission log for the daily report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("submission log is empty")]
    Empty,
    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: unparseable timestamp {value:?}")]
    Timestamp { line: usize, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}
