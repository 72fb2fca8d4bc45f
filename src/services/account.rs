use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, AddAccountCommand, Credentials},
    models::jsonwebtoken::AccessToken,
    repositories::account::AccountRepository,
    services::account::{AddAccount, Authentication},
    services::hasher::Hasher,
    services::jsonwebtoken::TokenGenerator,
};

use async_trait::async_trait;

pub struct DbAddAccount {
    hasher: Arc<dyn Hasher>,
    repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(hasher: Arc<dyn Hasher>, repository: Arc<dyn AccountRepository>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[tracing::instrument(skip_all)]
    async fn add(&self, mut command: AddAccountCommand) -> AppResult<Account> {
        command.password = self.hasher.hash(&command.password).await?;

        Ok(self.repository.add(command).await?)
    }
}

pub struct DbAuthentication {
    hasher: Arc<dyn Hasher>,
    repository: Arc<dyn AccountRepository>,
    token_generator: Arc<dyn TokenGenerator>,
}

impl DbAuthentication {
    pub fn new(
        hasher: Arc<dyn Hasher>,
        repository: Arc<dyn AccountRepository>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            hasher,
            repository,
            token_generator,
        }
    }
}

#[async_trait]
impl Authentication for DbAuthentication {
    #[tracing::instrument(skip_all)]
    async fn auth(&self, credentials: Credentials) -> AppResult<Option<AccessToken>> {
        let account = match self.repository.find_by_email(&credentials.email).await? {
            Some(account) => account,
            None => return Ok(None),
        };

        if !self
            .hasher
            .compare(&credentials.password, &account.password)
            .await?
        {
            return Ok(None);
        }

        Ok(Some(self.token_generator.generate_token(account.id)?))
    }
}
