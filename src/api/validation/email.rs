use std::sync::Arc;

use serde_json::Value;

use super::Validation;
use crate::api::error::FieldError;
use crate::api::protocols::Body;
use crate::domain::error::AppResult;
use crate::domain::services::email::EmailValidator;

pub struct EmailValidation {
    field: &'static str,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field: &'static str, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field,
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &Body) -> AppResult<Option<FieldError>> {
        let is_valid = match input.get(self.field) {
            Some(Value::String(email)) => self.email_validator.is_valid(email)?,
            _ => false,
        };

        Ok((!is_valid).then(|| FieldError::invalid(self.field)))
    }
}
