use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndentError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // --- Input ---
    InvalidInput,
    BoundsExceeded,

    // --- Style parsing ---
    InvalidStyle,

    // --- Configuration ---
    InvalidConfig,
    ConfigParseFailed,
}

#[derive(Debug, Error)]
pub enum IndentError {
    #[error("Validation Error: {message} (context: {context})")]
    Validation { code: ErrorCode, message: String, context: String },

    #[error("Parse Error: {message} (input: {input:?})")]
    Parse { code: ErrorCode, message: String, input: String },

    #[error("Config Error: {message} (field: {field})")]
    Config { code: ErrorCode, message: String, field: String },
}

impl IndentError {
    pub fn code(&self) -> &ErrorCode {
        match self {
            IndentError::Validation { code, .. }
            | IndentError::Parse { code, .. }
            | IndentError::Config { code, .. } => code,
        }
    }
}

impl From<serde_json::Error> for IndentError {
    fn from(e: serde_json::Error) -> Self {
        IndentError::Config {
            code: ErrorCode::ConfigParseFailed,
            message: e.to_string(),
            field: "<json>".to_string(),
        }
    }
}
