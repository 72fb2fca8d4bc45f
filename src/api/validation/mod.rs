mod compare_fields;
mod email;
mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use email::EmailValidation;
pub use required_field::RequiredFieldValidation;

use crate::api::error::FieldError;
use crate::api::protocols::Body;
use crate::domain::error::AppResult;

/// A single check over a request body.
///
/// `Ok(None)` means the input passed. An `Err` is a fault in the check itself,
/// not a rejection of the input.
pub trait Validation: Send + Sync {
    fn validate(&self, input: &Body) -> AppResult<Option<FieldError>>;
}

/// Ordered AND-chain of validations; the first rejection wins and later
/// validations are not run.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &Body) -> AppResult<Option<FieldError>> {
        for validation in &self.validations {
            if let Some(error) = validation.validate(input)? {
                return Ok(Some(error));
            }
        }

        Ok(None)
    }
}
