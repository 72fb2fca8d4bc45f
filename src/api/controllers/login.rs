use std::sync::Arc;

use async_trait::async_trait;

use crate::api::dto::account::AccessTokenDTO;
use crate::api::protocols::{
    Controller, HttpRequest, HttpResponse, bad_request, ok, server_error, unauthorized,
};
use crate::api::validation::Validation;
use crate::domain::error::AppResult;
use crate::domain::models::account::Credentials;
use crate::domain::services::account::Authentication;

pub struct LoginController {
    validation: Arc<dyn Validation>,
    authentication: Arc<dyn Authentication>,
}

impl LoginController {
    pub fn new(validation: Arc<dyn Validation>, authentication: Arc<dyn Authentication>) -> Self {
        Self {
            validation,
            authentication,
        }
    }

    async fn try_handle(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        if let Some(error) = self.validation.validate(&request.body)? {
            return Ok(bad_request(error));
        }

        let credentials = match Credentials::try_from(&request) {
            Ok(credentials) => credentials,
            Err(error) => return Ok(bad_request(error)),
        };

        match self.authentication.auth(credentials).await? {
            Some(access_token) => Ok(ok(serde_json::to_value(AccessTokenDTO::from(
                access_token,
            ))?)),
            None => Ok(unauthorized()),
        }
    }
}

#[async_trait]
impl Controller for LoginController {
    #[tracing::instrument(name = "login", skip_all)]
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.try_handle(request)
            .await
            .unwrap_or_else(|error| server_error(&error))
    }
}
