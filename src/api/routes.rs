use crate::api::adapter::adapt_route;
use crate::api::dto::account::{AccessTokenDTO, AccountDTO, CredentialsDTO, SignUpDTO};
use crate::api::middlewares::body::JsonRequest;
use crate::container::Container;
use crate::domain::error::AppError;

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn account(cfg: &mut ServiceConfig) {
    cfg.service(signup).service(login);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SignUpDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(payload: JsonRequest, container: State<Container>) -> HttpResponse {
    adapt_route(container.signup_controller.as_ref(), payload.into_inner()).await
}

#[utoipa::path(
    responses(
        (status = 200, body = AccessTokenDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CredentialsDTO,
    tag = "Account"
)]
#[post("/login")]
pub async fn login(payload: JsonRequest, container: State<Container>) -> HttpResponse {
    adapt_route(container.login_controller.as_ref(), payload.into_inner()).await
}
