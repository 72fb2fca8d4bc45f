use validator::ValidateEmail;

use crate::domain::{error::AppResult, services::email::EmailValidator};

/// Email syntax check backed by the `validator` crate.
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.to_owned().validate_email())
    }
}
