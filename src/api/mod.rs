use utoipa_actix_web::{scope, service_config::ServiceConfig};

pub mod adapter;
pub mod controllers;
pub mod decorators;
mod dto;
pub mod error;
mod middlewares;
pub mod protocols;
mod routes;
pub mod validation;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/api").configure(routes::account));
}
