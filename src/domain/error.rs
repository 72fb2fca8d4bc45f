use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::{BlockingError, JsonPayloadError};

use serde::Serialize;
use utoipa::ToSchema;

use argon2::password_hash::errors::Error as Argon2Error;

use crate::domain::repositories::repository::RepositoryError;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

/// Fault raised anywhere below the controller boundary.
///
/// Serialized as `{ "error": message }`; the trace never leaves the process
/// except through the error log.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip)]
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static UNAUTHORIZED: &str = "Unauthorized";
    pub static INTERNAL_ERROR: &str = "Internal server error";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);

    // 2. Errors with Default Message
    static_error!(Unauthorized, StatusCode::UNAUTHORIZED, message::UNAUTHORIZED);
    static_error!(InternalError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    /// Failure detail worth persisting: the trace when one was recorded,
    /// the rendered error otherwise.
    pub fn stack(&self) -> String {
        self.trace.clone().unwrap_or_else(|| self.to_string())
    }

    pub fn example_500() -> AppError {
        AppError::InternalError()
    }

    pub fn example_401() -> AppError {
        AppError::Unauthorized()
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest("Missing param: email")
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<Argon2Error> for AppError {
    fn from(error: Argon2Error) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        AppError::InternalError().trace(&format!("{error:?}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<BlockingError> for AppError {
    fn from(error: BlockingError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}
