use async_trait::async_trait;

use crate::domain::models::account::{Account, AddAccountCommand};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn add(&self, new_account: AddAccountCommand) -> RepositoryResult<Account>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>>;
}
