use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP error! status: {status}")]
    HttpStatusError { status: u16 },

    #[error("Invalid response format from API: {message}")]
    InvalidResponseError { message: String },

    #[error("Storage error for key '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("No products selected")]
    EmptySelectionError,

    #[error("Message is empty")]
    EmptyMessageError,

    #[error("Unknown product id: {id}")]
    UnknownProductError { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Storage,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ApiError(_) | AppError::HttpStatusError { .. } => ErrorCategory::Network,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::SerializationError(_) | AppError::InvalidResponseError { .. } => {
                ErrorCategory::Data
            }
            AppError::IoError(_) | AppError::StorageError { .. } => ErrorCategory::Storage,
            AppError::EmptySelectionError
            | AppError::EmptyMessageError
            | AppError::UnknownProductError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ApiError(_) => "Check your network connection and the chat endpoint URL",
            AppError::HttpStatusError { status } if *status >= 500 => {
                "The chat service is having trouble, please try again later"
            }
            AppError::HttpStatusError { .. } => "Check the chat endpoint URL and request format",
            AppError::InvalidResponseError { .. } | AppError::SerializationError(_) => {
                "The chat service returned an unexpected payload, please try again"
            }
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            AppError::IoError(_) | AppError::StorageError { .. } => {
                "Make sure the state directory and catalog file are readable and writable"
            }
            AppError::EmptySelectionError => "Please select some products first!",
            AppError::EmptyMessageError => "Type a question before sending",
            AppError::UnknownProductError { .. } => {
                "Run the `products` command to list valid product ids"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Data => {
                "Sorry, there was an error processing your message. Please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_errors_are_retryable_network_errors() {
        let err = AppError::HttpStatusError { status: 503 };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert!(err.recovery_suggestion().contains("try again later"));
    }

    #[test]
    fn test_input_errors_keep_their_own_message() {
        let err = AppError::EmptySelectionError;
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "No products selected");
        assert_eq!(err.recovery_suggestion(), "Please select some products first!");
    }

    #[test]
    fn test_network_errors_hide_details_from_users() {
        let err = AppError::InvalidResponseError {
            message: "missing output_text".to_string(),
        };
        assert!(err.user_friendly_message().starts_with("Sorry, there was an error"));
    }
}
