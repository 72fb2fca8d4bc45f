use actix_web::http::StatusCode;
use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::api::error::FieldError;
use crate::domain::error::AppError;

pub type Body = Map<String, Value>;

/// Framework-independent request: an untyped JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Data(Value),
    Error(FieldError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

/// The seam the web adapter binds to.
///
/// `handle` always resolves to a response; faults are turned into a 500
/// before they reach the caller.
#[async_trait]
pub trait Controller: 'static + Sync + Send {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

pub fn ok(data: Value) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: ResponseBody::Data(data),
    }
}

pub fn bad_request(error: FieldError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

pub fn unauthorized() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::UNAUTHORIZED,
        body: ResponseBody::Error(FieldError::Unauthorized),
    }
}

pub fn server_error(error: &AppError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(FieldError::ServerError {
            stack: error.stack(),
        }),
    }
}

impl HttpRequest {
    pub fn new(body: Body) -> Self {
        Self { body }
    }

    /// String value of a field, `InvalidParam` when it holds anything else.
    pub fn text(&self, field: &str) -> Result<String, FieldError> {
        self.body
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| FieldError::invalid(field))
    }
}

impl HttpResponse {
    pub fn error(&self) -> Option<&FieldError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Data(_) => None,
        }
    }
}
