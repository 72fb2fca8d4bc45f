use crate::domain::error::{AppError, AppResult};
use crate::domain::models::jsonwebtoken::{AccessToken, Claims};
use crate::domain::services::jsonwebtoken::TokenGenerator;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Issues RS256 access tokens whose subject is the account id.
pub struct JsonWebTokenServiceImpl {
    encoding: EncodingKey,
    lifetime: Duration,
}

impl JsonWebTokenServiceImpl {
    pub fn from_rsa_pem(
        private_key: &[u8],
        expiration_hours: i64,
    ) -> Result<Self, JsonWebTokenError> {
        Ok(JsonWebTokenServiceImpl {
            encoding: EncodingKey::from_rsa_pem(private_key)?,
            lifetime: Duration::hours(expiration_hours),
        })
    }
}

impl TokenGenerator for JsonWebTokenServiceImpl {
    fn generate_token(&self, id: String) -> AppResult<AccessToken> {
        let now = Utc::now();

        let expiration = now
            .checked_add_signed(self.lifetime)
            .ok_or_else(|| AppError::InternalError().trace("token expiration overflow"))?
            .timestamp();

        let claims = Claims {
            sub: id,
            exp: expiration as usize,
            iat: now.timestamp() as usize,
        };

        let header = Header::new(Algorithm::RS256);

        let token = encode(&header, &claims, &self.encoding)?;

        Ok(AccessToken { token })
    }
}
