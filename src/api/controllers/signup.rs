use std::sync::Arc;

use async_trait::async_trait;

use crate::api::dto::account::AccountDTO;
use crate::api::protocols::{
    Controller, HttpRequest, HttpResponse, bad_request, ok, server_error,
};
use crate::api::validation::Validation;
use crate::domain::error::AppResult;
use crate::domain::models::account::AddAccountCommand;
use crate::domain::services::account::AddAccount;

pub struct SignUpController {
    validation: Arc<dyn Validation>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(validation: Arc<dyn Validation>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            validation,
            add_account,
        }
    }

    async fn try_handle(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        if let Some(error) = self.validation.validate(&request.body)? {
            return Ok(bad_request(error));
        }

        let command = match AddAccountCommand::try_from(&request) {
            Ok(command) => command,
            Err(error) => return Ok(bad_request(error)),
        };

        let account = self.add_account.add(command).await?;

        Ok(ok(serde_json::to_value(AccountDTO::from(account))?))
    }
}

#[async_trait]
impl Controller for SignUpController {
    #[tracing::instrument(name = "signup", skip_all)]
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.try_handle(request)
            .await
            .unwrap_or_else(|error| server_error(&error))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use serde_json::{Value, json};
    use tokio::sync::Mutex;

    use super::*;
    use crate::api::error::FieldError;
    use crate::api::protocols::ResponseBody;
    use crate::api::validation::mock::ValidationStub;
    use crate::domain::error::AppError;
    use crate::domain::models::account::Account;
    use rstest::*;

    struct AddAccountStub {
        fails: bool,
        received: Mutex<Vec<AddAccountCommand>>,
    }

    #[async_trait]
    impl AddAccount for AddAccountStub {
        async fn add(&self, command: AddAccountCommand) -> AppResult<Account> {
            self.received.lock().await.push(command.clone());

            if self.fails {
                return Err(AppError::InternalError().trace("any_stack"));
            }

            Ok(Account {
                id: "valid_id".to_string(),
                name: command.name,
                email: command.email,
                password: "hashed_password".to_string(),
            })
        }
    }

    fn add_account(fails: bool) -> Arc<AddAccountStub> {
        Arc::new(AddAccountStub {
            fails,
            received: Mutex::new(vec![]),
        })
    }

    #[fixture]
    fn request() -> HttpRequest {
        let body = json!({
            "name": "valid_name",
            "email": "valid_email@email.com",
            "password": "valid_password",
            "passwordConfirmation": "valid_password"
        });
        HttpRequest::new(body.as_object().cloned().unwrap())
    }

    #[rstest]
    #[tokio::test]
    async fn test_returns_400_when_validation_rejects(request: HttpRequest) {
        let use_case = add_account(false);
        let sut = SignUpController::new(
            Arc::new(ValidationStub::rejecting(FieldError::missing("name"))),
            use_case.clone(),
        );

        let res = sut.handle(request).await;

        assert_eq!(res.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(res.error(), Some(&FieldError::missing("name")));
        assert!(use_case.received.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_calls_add_account_with_correct_values(request: HttpRequest) {
        let use_case = add_account(false);
        let sut = SignUpController::new(Arc::new(ValidationStub::passing()), use_case.clone());

        sut.handle(request).await;

        assert_eq!(
            *use_case.received.lock().await,
            vec![AddAccountCommand {
                name: "valid_name".to_string(),
                email: "valid_email@email.com".to_string(),
                password: "valid_password".to_string(),
            }]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_returns_500_when_add_account_fails(request: HttpRequest) {
        let sut = SignUpController::new(Arc::new(ValidationStub::passing()), add_account(true));

        let res = sut.handle(request).await;

        assert_eq!(res.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            res.error(),
            Some(&FieldError::ServerError {
                stack: "any_stack".to_string()
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_returns_500_when_validation_fails(request: HttpRequest) {
        let use_case = add_account(false);
        let sut = SignUpController::new(Arc::new(ValidationStub::failing()), use_case.clone());

        let res = sut.handle(request).await;

        assert_eq!(res.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(use_case.received.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_returns_200_with_stored_account(request: HttpRequest) {
        let sut = SignUpController::new(Arc::new(ValidationStub::passing()), add_account(false));

        let res = sut.handle(request).await;

        assert_eq!(res.status_code, StatusCode::OK);
        assert_eq!(
            res.body,
            ResponseBody::Data(json!({
                "id": "valid_id",
                "name": "valid_name",
                "email": "valid_email@email.com",
                "password": "hashed_password"
            }))
        );
    }

    #[tokio::test]
    async fn test_returns_400_for_non_string_field() {
        let use_case = add_account(false);
        let sut = SignUpController::new(Arc::new(ValidationStub::passing()), use_case.clone());
        let body: Value = json!({ "name": ["a"], "email": "e@mail.com", "password": "p" });

        let res = sut
            .handle(HttpRequest::new(body.as_object().cloned().unwrap()))
            .await;

        assert_eq!(res.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(res.error(), Some(&FieldError::invalid("name")));
        assert!(use_case.received.lock().await.is_empty());
    }
}
