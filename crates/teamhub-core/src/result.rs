//! Convenience result type alias for TeamHub.

use crate::error::AppError;

/// A specialized `Result` type for TeamHub operations.
pub type AppResult<T> = Result<T, AppError>;
