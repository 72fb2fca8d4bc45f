use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};
use tokio::sync::RwLock;

pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Client>, Error> {
    let db = Surreal::new::<Ws>(format!("{}:{}", db_config.host, db_config.port)).await?;

    db.signin(Root {
        username: db_config.username.as_str(),
        password: db_config.password.as_str(),
    })
    .await?;

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    Ok(db)
}

/// Shared SurrealDB connection with reconnect on demand.
///
/// `acquire` hands out a cheap clone of the live client. When there is no
/// connection yet, or the current one fails its health check, a new one is
/// opened in its place. After `close` the next `acquire` reconnects.
pub struct SurrealPool {
    config: SurrealDbConfig,
    conn: RwLock<Option<Surreal<Client>>>,
}

impl SurrealPool {
    pub fn new(config: SurrealDbConfig) -> Self {
        Self {
            config,
            conn: RwLock::new(None),
        }
    }

    pub async fn init(&self) -> Result<Surreal<Client>, Error> {
        let db = connect(&self.config).await?;
        *self.conn.write().await = Some(db.clone());

        tracing::info!(
            host = %self.config.host,
            port = self.config.port,
            "connected to surrealdb"
        );

        Ok(db)
    }

    pub async fn acquire(&self) -> Result<Surreal<Client>, Error> {
        if let Some(db) = self.conn.read().await.clone() {
            if db.health().await.is_ok() {
                return Ok(db);
            }
            tracing::warn!("surrealdb connection lost, reconnecting");
        }

        self.init().await
    }

    pub async fn close(&self) {
        if let Some(db) = self.conn.write().await.take() {
            if let Err(err) = db.invalidate().await {
                tracing::warn!(error = %err, "could not invalidate surrealdb session");
            }
        }
    }
}
