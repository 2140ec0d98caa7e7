use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] bincode::Error),

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

    #[error("Invalid input constraint: {message}")]
    InvalidConstraintError { message: String },

    #[error("Input stream closed")]
    InputClosed,

    #[error("Invalid value for birth weight: {value}")]
    InvalidBirthWeight { value: f64 },

    #[error("Invalid date of birth: {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Configuration,
    Input,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InventoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            InventoryError::IoError(_) | InventoryError::EncodingError(_) => ErrorCategory::Storage,
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            InventoryError::InvalidConstraintError { .. } | InventoryError::InputClosed => {
                ErrorCategory::Input
            }
            InventoryError::InvalidBirthWeight { .. }
            | InventoryError::InvalidDate { .. }
            | InventoryError::ValidationError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入結束：視同未確認的離開
            InventoryError::InputClosed => ErrorSeverity::Low,
            InventoryError::ConfigError { .. }
            | InventoryError::ConfigValidationError { .. }
            | InventoryError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            InventoryError::InvalidDate { .. } | InventoryError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            InventoryError::IoError(_)
            | InventoryError::EncodingError(_)
            | InventoryError::InvalidConstraintError { .. }
            | InventoryError::InvalidBirthWeight { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InventoryError::IoError(e) => format!("Could not access the pet data file: {}", e),
            InventoryError::EncodingError(_) => {
                "The pet data file is unreadable or was written by an incompatible version".to_string()
            }
            InventoryError::ConfigError { message } => format!("Configuration problem: {}", message),
            InventoryError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            InventoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            InventoryError::InvalidConstraintError { message } => {
                format!("Internal prompt misconfiguration: {}", message)
            }
            InventoryError::InputClosed => "Input ended before exit was confirmed".to_string(),
            InventoryError::InvalidBirthWeight { .. } => "Invalid value for birth weight".to_string(),
            InventoryError::InvalidDate { year, month, day } => {
                format!("{}-{}-{} is not a valid date", year, month, day)
            }
            InventoryError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Storage => {
                "Check that the data file path is readable and writable, or move the old file aside"
            }
            ErrorCategory::Configuration => "Fix the configuration file or command line arguments",
            ErrorCategory::Input => "Run the program again and confirm exit with 'y' to keep changes",
            ErrorCategory::Data => "Birth weight must be greater than zero; pets added this session were not saved",
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
