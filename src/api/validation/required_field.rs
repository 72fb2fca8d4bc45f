use serde_json::Value;

use super::Validation;
use crate::api::error::FieldError;
use crate::api::protocols::Body;
use crate::domain::error::AppResult;

/// Rejects a body whose field is absent, null or an empty string.
pub struct RequiredFieldValidation {
    field: &'static str,
}

impl RequiredFieldValidation {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Body) -> AppResult<Option<FieldError>> {
        let missing = match input.get(self.field) {
            None | Some(Value::Null) => true,
            Some(Value::String(value)) => value.is_empty(),
            Some(_) => false,
        };

        Ok(missing.then(|| FieldError::missing(self.field)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde_json::json;

    #[rstest]
    #[case::absent(json!({ "email": "any_email@mail.com" }))]
    #[case::null(json!({ "name": null }))]
    #[case::empty(json!({ "name": "" }))]
    fn test_rejects_missing_field(#[case] body: Value) {
        let sut = RequiredFieldValidation::new("name");

        assert_eq!(
            sut.validate(body.as_object().unwrap()).unwrap(),
            Some(FieldError::missing("name"))
        );
    }

    #[test]
    fn test_accepts_present_field() {
        let sut = RequiredFieldValidation::new("name");
        let body = json!({ "name": "any_name" });

        assert_eq!(sut.validate(body.as_object().unwrap()).unwrap(), None);
    }
}
