use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatcfgError {
    #[error("{0}")]
    Validation(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("Delimited export error: {0}")]
    Delimited(#[from] csv::Error),

    #[error("Document error: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, CatcfgError>;
