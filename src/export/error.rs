use thiserror::Error;

/// Failures while rendering entries into an export format.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    CsvFlush(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
    #[error("failed to write table: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
