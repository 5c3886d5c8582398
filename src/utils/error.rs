use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("CSV processing error: {reason} starting on line {line}")]
    MalformedCsvError { line: u64, reason: String },

    #[error("Row {line} has {fields} field(s), expected at least 3 (id, price, expiration_date)")]
    ShortRowError { line: u64, fields: usize },

    #[error("Invalid promotion ID")]
    InvalidIdError { raw: String },

    #[error("Promotion with ID {id} not found")]
    NotFoundError { id: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Promotion store lock poisoned")]
    LockPoisoned,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PromoError {
    /// Whether the error belongs to a single request rather than to startup.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            PromoError::InvalidIdError { .. }
                | PromoError::NotFoundError { .. }
                | PromoError::SerializationError(_)
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PromoError::IoError(_) => "Check that the dataset file exists and is readable",
            PromoError::CsvError(_) => {
                "Check the dataset for invalid UTF-8 or rows of differing width"
            }
            PromoError::MalformedCsvError { .. } => "Close the quoted field in the dataset",
            PromoError::ShortRowError { .. } => {
                "Fix the short row, or start with --row-policy skip to ignore it"
            }
            PromoError::InvalidIdError { .. } => "Promotion IDs must be integers",
            PromoError::NotFoundError { .. } => "Verify the promotion ID exists in the dataset",
            PromoError::SerializationError(_) => "Inspect the stored record for invalid data",
            PromoError::LockPoisoned => "Restart the service",
            PromoError::ConfigError { .. } | PromoError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PromoError>;

impl From<&PromoError> for StatusCode {
    fn from(err: &PromoError) -> Self {
        match err {
            PromoError::InvalidIdError { .. } => StatusCode::BAD_REQUEST,
            PromoError::NotFoundError { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PromoError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let body = match &self {
            PromoError::InvalidIdError { .. } | PromoError::NotFoundError { .. } => self.to_string(),
            PromoError::SerializationError(_) => "Error encoding promotion to JSON".to_string(),
            _ => "Internal server error".to_string(),
        };
        if self.is_request_error() {
            tracing::debug!("Request rejected: {}", self);
        } else {
            tracing::error!("Request failed: {}", self);
        }
        (status, body).into_response()
    }
}
