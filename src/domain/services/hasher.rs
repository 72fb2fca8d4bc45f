use async_trait::async_trait;

use crate::domain::error::AppResult;

#[async_trait]
pub trait Hasher: 'static + Sync + Send {
    async fn hash(&self, plain: &str) -> AppResult<String>;
    async fn compare(&self, plain: &str, hashed: &str) -> AppResult<bool>;
}
