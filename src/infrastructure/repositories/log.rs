use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::repositories::log::LogErrorRepository;
use crate::domain::repositories::repository::RepositoryResult;
use crate::infrastructure::databases::surrealdb::SurrealPool;
use crate::infrastructure::models::log::SurrealErrorLogCreate;

pub struct LogRepositoryImpl {
    pool: Arc<SurrealPool>,
}

impl LogRepositoryImpl {
    pub fn new(pool: Arc<SurrealPool>) -> Self {
        Self { pool }
    }
}

const ERROR: &str = "error";

#[async_trait]
impl LogErrorRepository for LogRepositoryImpl {
    async fn log_error(&self, stack: &str) -> RepositoryResult<()> {
        self.pool
            .acquire()
            .await?
            .query("CREATE type::table($table) CONTENT $log RETURN NONE")
            .bind(("table", ERROR))
            .bind(("log", SurrealErrorLogCreate::now(stack)))
            .await?
            .check()?;

        Ok(())
    }
}
