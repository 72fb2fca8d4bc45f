mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::AppConfig;
use container::Container;
use infrastructure::databases::surrealdb::SurrealPool;
use services::hasher::Argon2Hasher;
use services::jsonwebtoken::JsonWebTokenServiceImpl;

use actix_web::HttpServer;
use include_dir::{Dir, include_dir};
use std::fs;
use std::sync::Arc;
use surrealdb_migrations::MigrationRunner;
use thiserror::Error;

#[cfg(test)]
mod tests;

const MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
    #[error(transparent)]
    JsonWebToken(#[from] jsonwebtoken::errors::Error),
    #[error("{0}")]
    Hasher(#[from] domain::error::AppError),
    #[error("{0}: {1}")]
    ReadKey(String, String),
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let pool = Arc::new(SurrealPool::new(config.surrealdb.clone()));
    let conn = pool.init().await?;

    if config.surrealdb.migration {
        MigrationRunner::new(&conn)
            .load_files(&MIGRATIONS_DIR)
            .up()
            .await
            .map_err(|err| AppError::Migration(err.to_string()))?;
    }

    let private_key = read_key(&config.jsonwebtoken.private_keyfile)?;

    let token_generator = Arc::new(JsonWebTokenServiceImpl::from_rsa_pem(
        &private_key,
        config.jsonwebtoken.expiration_hours,
    )?);
    let hasher = Arc::new(Argon2Hasher::new(&config.hasher)?);

    let container = Arc::new(Container::new(pool.clone(), hasher, token_generator));

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting http server"
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    pool.close().await;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}

fn read_key(keyfile: &str) -> Result<Vec<u8>, AppError> {
    fs::read(keyfile).map_err(|err| AppError::ReadKey(err.to_string(), keyfile.to_string()))
}
