use derive_more::Display;

/// Simplified error system - one kind per external surface.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// Transport failure, non-2xx status or undecodable payload.
    #[display(fmt = "{}", _0)]
    NetworkError(String),
    #[display(fmt = "Storage Error: {}", _0)]
    StorageError(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        AppError::NetworkError(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AppError::StorageError(message.into())
    }
}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type StorageResult<T> = Result<T, AppError>;
