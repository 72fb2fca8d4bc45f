use std::sync::Arc;

use actix_web::http::StatusCode;
use async_trait::async_trait;

use crate::api::error::FieldError;
use crate::api::protocols::{Controller, HttpRequest, HttpResponse};
use crate::domain::repositories::log::LogErrorRepository;

/// Wraps any controller and persists the failure detail of every 500 it
/// produces. The inner response is returned untouched.
pub struct LogControllerDecorator {
    controller: Arc<dyn Controller>,
    log_error_repository: Arc<dyn LogErrorRepository>,
}

impl LogControllerDecorator {
    pub fn new(
        controller: Arc<dyn Controller>,
        log_error_repository: Arc<dyn LogErrorRepository>,
    ) -> Self {
        Self {
            controller,
            log_error_repository,
        }
    }
}

#[async_trait]
impl Controller for LogControllerDecorator {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.status_code == StatusCode::INTERNAL_SERVER_ERROR {
            if let Some(FieldError::ServerError { stack }) = response.error() {
                tracing::error!(%stack, "controller failed");

                // A failed write must not change what the client receives.
                if let Err(err) = self.log_error_repository.log_error(stack).await {
                    tracing::warn!(error = %err, "could not persist error log");
                }
            }
        }

        response
    }
}
