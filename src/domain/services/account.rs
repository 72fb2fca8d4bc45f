use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AddAccountCommand, Credentials};
use crate::domain::models::jsonwebtoken::AccessToken;

#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, command: AddAccountCommand) -> AppResult<Account>;
}

#[async_trait]
pub trait Authentication: 'static + Sync + Send {
    /// Returns `None` when the credentials do not match any account.
    async fn auth(&self, credentials: Credentials) -> AppResult<Option<AccessToken>>;
}
