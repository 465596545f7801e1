use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuslastungError {
    #[error("only .xlsx and .csv files are supported: {0}")]
    UnsupportedFormat(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("error reading Proad export {path}: {message}")]
    ProadRead { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot open workbook {path}: {message}")]
    WorkbookOpen { path: String, message: String },

    #[error("cannot save workbook {path}: {message}")]
    WorkbookSave { path: String, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sheet {sheet}: {source}")]
    Coordinate {
        sheet: String,
        #[source]
        source: auslastung_common::InvalidCoordinate,
    },
}

pub type Result<T> = std::result::Result<T, AuslastungError>;
