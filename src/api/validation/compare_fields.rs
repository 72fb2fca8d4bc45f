use super::Validation;
use crate::api::error::FieldError;
use crate::api::protocols::Body;
use crate::domain::error::AppResult;

/// Rejects `to_compare` when its value differs from `field`.
pub struct CompareFieldsValidation {
    field: &'static str,
    to_compare: &'static str,
}

impl CompareFieldsValidation {
    pub fn new(field: &'static str, to_compare: &'static str) -> Self {
        Self { field, to_compare }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Body) -> AppResult<Option<FieldError>> {
        let matches = input.get(self.field) == input.get(self.to_compare);

        Ok((!matches).then(|| FieldError::invalid(self.to_compare)))
    }
}
