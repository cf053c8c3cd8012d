// File: crates/sunburst-core/src/error.rs
// Summary: Library error type; input variants carry the user-facing alert text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SunburstError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid hierarchy: {message}")]
    Validation { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    /// Empty category name in the add form.
    #[error("Please enter a category name and value")]
    MissingName,

    /// Value input that does not parse as a finite number.
    #[error("Please enter a category name and value")]
    InvalidValue { input: String },

    #[error("Parent category not found")]
    ParentNotFound { name: String },

    #[error("Category already exists")]
    DuplicateCategory { name: String },

    #[error("Unknown category: {name}")]
    UnknownCategory { name: String },
}

impl SunburstError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub(crate) fn render(message: impl Into<String>) -> Self {
        Self::Render { message: message.into() }
    }

    /// True for errors caused by form input, which the UI shows as an alert.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::MissingName
                | Self::InvalidValue { .. }
                | Self::ParentNotFound { .. }
                | Self::DuplicateCategory { .. }
                | Self::UnknownCategory { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SunburstError>;
