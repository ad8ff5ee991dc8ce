use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Response is missing field '{field}'")]
    MissingFieldError { field: String },

    #[error("Field 'jobs' must be an array, found {found}")]
    InvalidJobsError { found: String },

    #[error("Job record at index {index} must be an object, found {found}")]
    InvalidRecordError { index: usize, found: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::HttpStatusError { .. } => ErrorCategory::Network,
            EtlError::SerializationError(_)
            | EtlError::MissingFieldError { .. }
            | EtlError::InvalidJobsError { .. }
            | EtlError::InvalidRecordError { .. }
            | EtlError::CsvError(_) => ErrorCategory::Data,
            EtlError::WriteError { .. } | EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::ApiError(_) => {
                "Check network connectivity and that the API endpoint is reachable".to_string()
            }
            EtlError::HttpStatusError { status, .. } if *status >= 500 => {
                "The upstream API is failing; run the extraction again later".to_string()
            }
            EtlError::HttpStatusError { .. } => {
                "Check the API endpoint and search term".to_string()
            }
            EtlError::SerializationError(_)
            | EtlError::MissingFieldError { .. }
            | EtlError::InvalidJobsError { .. }
            | EtlError::InvalidRecordError { .. } => {
                "The API response format changed; inspect the raw response".to_string()
            }
            EtlError::CsvError(_) => "Inspect the job records for unexpected values".to_string(),
            EtlError::WriteError { .. } => {
                "Make sure the output directory exists and is writable, or pass --create-dirs"
                    .to_string()
            }
            EtlError::IoError(_) => "Check that the file exists and is readable".to_string(),
            EtlError::ConfigError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        let stage = match self.category() {
            ErrorCategory::Network => "Fetching jobs failed",
            ErrorCategory::Data => "Processing jobs failed",
            ErrorCategory::Storage => "Writing output failed",
            ErrorCategory::Configuration => "Invalid configuration",
        };
        format!("{}: {}", stage, self)
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
