use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipezError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Invalid recipe: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage unavailable for '{key}': {reason}")]
    StoreUnavailable { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecipezError {
    pub fn store(key: impl Into<String>, reason: impl ToString) -> Self {
        RecipezError::StoreUnavailable {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures of the persistence layer, which are never fatal.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn is_store_failure(&self) -> bool {
        matches!(
            self,
            RecipezError::StoreUnavailable { .. } | RecipezError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RecipezError>;
