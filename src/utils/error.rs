use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Contact channel error: {message}")]
    ChannelError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::IoError(_) | PortfolioError::SerializationError(_) => ErrorCategory::Io,
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PortfolioError::ChannelError { .. } => ErrorCategory::Delivery,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PortfolioError::ChannelError { .. } => ErrorSeverity::Medium,
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorSeverity::High,
            PortfolioError::IoError(_) | PortfolioError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read a required file: {}", e),
            PortfolioError::SerializationError(e) => format!("Could not encode output: {}", e),
            PortfolioError::ConfigValidationError { field, message } => {
                format!("The site file is invalid ({}): {}", field, message)
            }
            PortfolioError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is not valid: {}", field, reason)
            }
            PortfolioError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            PortfolioError::ChannelError { message } => {
                format!("Your message could not be delivered: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable",
            ErrorCategory::Configuration => {
                "Fix the value in the site TOML file or remove it to use the default"
            }
            ErrorCategory::Delivery => "Try submitting the form again later",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
