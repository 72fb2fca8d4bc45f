
pub mod utils;

use ::surrealdb::{Surreal, engine::remote::ws::Client};

use crate::tests::utils::crypto::generate_keypair;
use std::sync::Arc;

use serde::Deserialize;
use surrealdb_migrations::MigrationRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::{
    surrealdb::{SURREALDB_PORT, SurrealDb},
    testcontainers::runners::AsyncRunner,
};

use crate::MIGRATIONS_DIR;
use crate::infrastructure::databases::surrealdb::SurrealPool;
use crate::services::{hasher::Argon2Hasher, jsonwebtoken::JsonWebTokenServiceImpl};
use crate::{config::AppConfig, container::Container};

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    test::TestRequest,
};
use serde_json::json;

use rstest::*;

pub struct Database {
    pub connection: Surreal<Client>,
    pub pool: Arc<SurrealPool>,
    pub container: ContainerAsync<SurrealDb>,
}

pub struct TestContext {
    pub db: Database,
    pub container: Arc<Container>,
}

#[fixture]
async fn context() -> TestContext {
    let db_container = SurrealDb::default()
        .with_tag("latest")
        .start()
        .await
        .unwrap();

    let mut config = AppConfig::load().unwrap();

    config.surrealdb.port = db_container
        .get_host_port_ipv4(SURREALDB_PORT)
        .await
        .unwrap();

    let pool = Arc::new(SurrealPool::new(config.surrealdb.clone()));
    let db_connection = pool.init().await.unwrap();

    let _ = MigrationRunner::new(&db_connection)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await;

    let (private_key, _) = generate_keypair();

    let container = Arc::new(Container::new(
        pool.clone(),
        Arc::new(Argon2Hasher::new(&config.hasher).unwrap()),
        Arc::new(JsonWebTokenServiceImpl::from_rsa_pem(&private_key, 1).unwrap()),
    ));

    let db = Database {
        connection: db_connection,
        pool,
        container: db_container,
    };

    TestContext { db, container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    error: String,
}

async fn login<S, B>(app: &S, email: &str, password: &str) -> ServiceResponse<B>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    TestRequest::post()
        .uri("/api/login")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(app)
        .await
}
