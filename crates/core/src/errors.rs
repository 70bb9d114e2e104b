use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    pub fn validation(message: impl Into<String>) -> Self {
        BookingError::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, BookingError::Validation(_))
    }

    /// True when a collaborator could not be reached or failed mid-call.
    pub fn is_fetch(&self) -> bool {
        matches!(self, BookingError::Fetch(_))
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
