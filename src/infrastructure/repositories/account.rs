use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::account::{Account, AddAccountCommand};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::databases::surrealdb::SurrealPool;
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    pool: Arc<SurrealPool>,
}

impl AccountRepositoryImpl {
    pub fn new(pool: Arc<SurrealPool>) -> Self {
        Self { pool }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn add(&self, new_account: AddAccountCommand) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .pool
            .acquire()
            .await?
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(new_account))
            .await?;

        account
            .map(Into::into)
            .ok_or(RepositoryError::NotCreated(ACCOUNT))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .pool
            .acquire()
            .await?
            .query("SELECT * FROM type::table($table) WHERE email = type::string($email) LIMIT 1")
            .bind(("table", ACCOUNT))
            .bind(("email", email.to_owned()))
            .await?
            .take(0)?;

        Ok(account.map(Into::into))
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    pub struct AccountRepositoryImpl {
        pub accounts: Mutex<Vec<Account>>,
        pub fails: bool,
    }

    #[async_trait]
    impl AccountRepository for AccountRepositoryImpl {
        async fn add(&self, account: AddAccountCommand) -> RepositoryResult<Account> {
            if self.fails {
                return Err(RepositoryError::NotCreated(ACCOUNT));
            }

            let mut accounts = self.accounts.lock().await;

            let acc = Account {
                id: (accounts.len() + 1).to_string(),
                name: account.name,
                email: account.email,
                password: account.password,
            };

            accounts.push(acc.clone());

            Ok(acc)
        }

        async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Account>> {
            let accounts = self.accounts.lock().await;

            Ok(accounts.iter().find(|a| a.email == email).cloned())
        }
    }
}
