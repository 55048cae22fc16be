//! Convenience result type alias for Postline.

use crate::error::AppError;

/// A specialized `Result` type for Postline operations.
pub type AppResult<T> = Result<T, AppError>;
