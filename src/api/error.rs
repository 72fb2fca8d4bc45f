use thiserror::Error;

/// Classification of a rejected or failed request; selects the status code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Missing param: {0}")]
    MissingParam(String),
    #[error("Invalid param: {0}")]
    InvalidParam(String),
    #[error("Internal server error")]
    ServerError { stack: String },
    #[error("Unauthorized")]
    Unauthorized,
}

impl FieldError {
    pub fn missing(field: &str) -> Self {
        Self::MissingParam(field.to_owned())
    }

    pub fn invalid(field: &str) -> Self {
        Self::InvalidParam(field.to_owned())
    }
}
