use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Matrix cannot be empty")]
    EmptyMatrix,

    #[error("Matrix rows cannot be empty")]
    EmptyRow,

    #[error("All rows must have the same length (row {row} has {found} columns, expected {expected})")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{axis} index {index} out of bounds (0-{max})")]
    IndexOutOfBounds {
        axis: &'static str,
        index: usize,
        max: usize,
    },

    #[error("{message}")]
    DimensionMismatch { message: String },

    #[error("{operation} can only be calculated for square matrices")]
    NotSquare { operation: &'static str },

    #[error("Matrix size must be at least 1")]
    InvalidSize,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Math,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn dimension_mismatch(message: impl Into<String>) -> Self {
        AppError::DimensionMismatch {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::EmptyMatrix
            | AppError::EmptyRow
            | AppError::RaggedRows { .. }
            | AppError::IndexOutOfBounds { .. }
            | AppError::DimensionMismatch { .. }
            | AppError::NotSquare { .. }
            | AppError::InvalidSize => ErrorCategory::Math,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::Io,
            AppError::SerializationError(_) | AppError::CsvError(_) => {
                ErrorCategory::Serialization
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Math => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::EmptyMatrix | AppError::EmptyRow => {
                "Provide at least one row with at least one value"
            }
            AppError::RaggedRows { .. } => "Make every row of the matrix the same length",
            AppError::IndexOutOfBounds { .. } => "Use 0-based indices inside the matrix shape",
            AppError::DimensionMismatch { .. } => {
                "Check the matrix shapes; addition needs equal shapes, multiplication needs left.cols == right.rows"
            }
            AppError::NotSquare { .. } => "Use a matrix with as many rows as columns",
            AppError::InvalidSize => "Use a size of 1 or more",
            AppError::IoError(_) => "Check that the file exists and the path is readable/writable",
            AppError::SerializationError(_) => "Report this; the report could not be encoded as JSON",
            AppError::CsvError(_) => "Check the CSV file: comma separated numbers, one row per line",
            AppError::ConfigValidationError { .. } => "Fix the TOML syntax in the configuration file",
            AppError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Math => format!("Matrix operation failed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Serialization => format!("Could not read or write data: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
