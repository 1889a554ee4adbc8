use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data file not found: {0}")]
    DataFileNotFound(String),

    #[error("Unknown club: {name}\nvalid clubs: {valid}")]
    UnknownClub { name: String, valid: String },

    #[error("Unknown position: {name}\nvalid positions: {valid}")]
    UnknownPosition { name: String, valid: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MlsError>;
