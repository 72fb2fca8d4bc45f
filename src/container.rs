use std::sync::Arc;

use crate::api::controllers::login::LoginController;
use crate::api::controllers::signup::SignUpController;
use crate::api::decorators::log::LogControllerDecorator;
use crate::api::protocols::Controller;
use crate::api::validation::{
    CompareFieldsValidation, EmailValidation, RequiredFieldValidation, Validation,
    ValidationComposite,
};

use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::log::LogErrorRepository;
use crate::domain::services::email::EmailValidator;
use crate::domain::services::hasher::Hasher;
use crate::domain::services::jsonwebtoken::TokenGenerator;

use crate::services::account::{DbAddAccount, DbAuthentication};
use crate::services::email::EmailValidatorAdapter;

use crate::infrastructure::databases::surrealdb::SurrealPool;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::repositories::log::LogRepositoryImpl;

/// Fully wired controllers, each wrapped in the error-logging decorator.
pub struct Container {
    pub signup_controller: Arc<dyn Controller>,
    pub login_controller: Arc<dyn Controller>,
}

impl Container {
    pub fn new(
        pool: Arc<SurrealPool>,
        hasher: Arc<dyn Hasher>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        let account_repository: Arc<dyn AccountRepository> =
            Arc::new(AccountRepositoryImpl::new(pool.clone()));
        let log_repository: Arc<dyn LogErrorRepository> = Arc::new(LogRepositoryImpl::new(pool));

        Container {
            signup_controller: signup_controller(
                hasher.clone(),
                account_repository.clone(),
                log_repository.clone(),
            ),
            login_controller: login_controller(
                hasher,
                account_repository,
                token_generator,
                log_repository,
            ),
        }
    }
}

pub fn signup_controller(
    hasher: Arc<dyn Hasher>,
    account_repository: Arc<dyn AccountRepository>,
    log_repository: Arc<dyn LogErrorRepository>,
) -> Arc<dyn Controller> {
    let add_account = Arc::new(DbAddAccount::new(hasher, account_repository));
    let controller = Arc::new(SignUpController::new(signup_validation(), add_account));

    Arc::new(LogControllerDecorator::new(controller, log_repository))
}

pub fn login_controller(
    hasher: Arc<dyn Hasher>,
    account_repository: Arc<dyn AccountRepository>,
    token_generator: Arc<dyn TokenGenerator>,
    log_repository: Arc<dyn LogErrorRepository>,
) -> Arc<dyn Controller> {
    let authentication = Arc::new(DbAuthentication::new(
        hasher,
        account_repository,
        token_generator,
    ));
    let controller = Arc::new(LoginController::new(login_validation(), authentication));

    Arc::new(LogControllerDecorator::new(controller, log_repository))
}

pub fn signup_validation() -> Arc<dyn Validation> {
    let email_validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter);

    let mut validations: Vec<Box<dyn Validation>> =
        ["name", "email", "password", "passwordConfirmation"]
            .into_iter()
            .map(|field| Box::new(RequiredFieldValidation::new(field)) as Box<dyn Validation>)
            .collect();

    validations.push(Box::new(EmailValidation::new("email", email_validator)));
    validations.push(Box::new(CompareFieldsValidation::new(
        "password",
        "passwordConfirmation",
    )));

    Arc::new(ValidationComposite::new(validations))
}

pub fn login_validation() -> Arc<dyn Validation> {
    let email_validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter);

    Arc::new(ValidationComposite::new(vec![
        Box::new(RequiredFieldValidation::new("email")),
        Box::new(RequiredFieldValidation::new("password")),
        Box::new(EmailValidation::new("email", email_validator)),
    ]))
}
