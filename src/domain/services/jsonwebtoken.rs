use crate::domain::{error::AppResult, models::jsonwebtoken::AccessToken};

pub trait TokenGenerator: 'static + Sync + Send {
    fn generate_token(&self, id: String) -> AppResult<AccessToken>;
}
