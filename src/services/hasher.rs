use crate::config::HasherConfig;
use crate::domain::{error::AppResult, services::hasher::Hasher};

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as Argon2Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use actix_web::web;
use async_trait::async_trait;

/// Argon2id hasher producing PHC strings. Both operations run on the
/// blocking thread pool.
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new(config: &HasherConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_cost, config.time_cost, config.parallelism, None)
            .map_err(Argon2Error::from)?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait]
impl Hasher for Argon2Hasher {
    async fn hash(&self, plain: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let plain = plain.to_owned();

        web::block(move || {
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(plain.as_bytes(), &salt)
                .map(|hash| hash.to_string())
        })
        .await?
        .map_err(Into::into)
    }

    async fn compare(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        let argon2 = self.argon2.clone();
        let plain = plain.to_owned();
        let hashed = hashed.to_owned();

        web::block(move || -> Result<bool, Argon2Error> {
            let hash = PasswordHash::new(&hashed)?;

            match argon2.verify_password(plain.as_bytes(), &hash) {
                Ok(()) => Ok(true),
                Err(Argon2Error::Password) => Ok(false),
                Err(error) => Err(error),
            }
        })
        .await?
        .map_err(Into::into)
    }
}
