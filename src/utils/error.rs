use thiserror::Error;

#[derive(Error, Debug)]
pub enum SoilError {
    #[error("Error fetching soil data: {message}")]
    FetchError { message: String },

    #[error("Error analyzing soil suitability: {message}")]
    ProcessingError { message: String },

    #[error("Invalid coordinate {field}={value}: {reason}")]
    InvalidCoordinateError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Causes raised along the acquisition path. These never leave the core on
/// their own; `fetch_soil_data` folds every one of them into
/// [`SoilError::FetchError`].
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Malformed soil payload: {message}")]
    MalformedPayload { message: String },

    #[error("Missing essential soil data from the API response: {}", .missing.join(", "))]
    IncompleteData { missing: Vec<&'static str> },
}

impl From<serde_json::Error> for AcquisitionError {
    fn from(e: serde_json::Error) -> Self {
        AcquisitionError::MalformedPayload {
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something the service cannot act on.
    Input,
    /// The provider could not deliver usable soil data.
    Acquisition,
    /// Suitability evaluation failed on data that was acquired.
    Analysis,
    Configuration,
    System,
}

pub type Result<T> = std::result::Result<T, SoilError>;

impl SoilError {
    pub fn fetch(cause: impl std::fmt::Display) -> Self {
        SoilError::FetchError {
            message: cause.to_string(),
        }
    }

    pub fn processing(cause: impl std::fmt::Display) -> Self {
        SoilError::ProcessingError {
            message: cause.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SoilError::FetchError { .. } => ErrorCategory::Acquisition,
            SoilError::ProcessingError { .. } => ErrorCategory::Analysis,
            SoilError::InvalidCoordinateError { .. } => ErrorCategory::Input,
            SoilError::ConfigError { .. } | SoilError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SoilError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Status code a request boundary should answer with.
    pub fn http_status(&self) -> u16 {
        match self.category() {
            ErrorCategory::Input => 422,
            ErrorCategory::Acquisition => 400,
            _ => 500,
        }
    }

    /// Message safe to hand back to a caller. Server-side failures are not
    /// described beyond a generic line.
    pub fn user_friendly_message(&self) -> String {
        match self.http_status() {
            500 => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Latitude must be within [-90, 90] and longitude within [-180, 180]"
            }
            ErrorCategory::Acquisition => {
                "No data for this location; try a nearby coordinate or check the API endpoint"
            }
            ErrorCategory::Analysis => {
                "Inspect the soil values returned by `info` for this coordinate"
            }
            ErrorCategory::Configuration => {
                "Check the configuration file, environment variables and CLI flags"
            }
            ErrorCategory::System => "Check file permissions and paths",
        }
    }

    /// Process exit code for CLI callers: 2 for client-side errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.http_status() {
            400..=499 => 2,
            _ => 1,
        }
    }
}
