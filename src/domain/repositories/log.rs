use async_trait::async_trait;

use super::repository::RepositoryResult;

/// Sink for failure details captured from server-error responses.
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    async fn log_error(&self, stack: &str) -> RepositoryResult<()>;
}
