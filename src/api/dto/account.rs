use crate::api::error::FieldError;
use crate::api::protocols::HttpRequest;
use crate::domain::models::account::{Account, AddAccountCommand, Credentials};
use crate::domain::models::jsonwebtoken::AccessToken;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    id: String,
    name: String,
    email: String,
    password: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDTO {
    #[schema(examples("your_name"))]
    pub name: String,

    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("your_password"))]
    pub password: String,

    #[schema(examples("your_password"))]
    pub password_confirmation: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsDTO {
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[schema(examples("your_password"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub access_token: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}

impl From<AccessToken> for AccessTokenDTO {
    fn from(val: AccessToken) -> Self {
        AccessTokenDTO {
            access_token: val.token,
        }
    }
}

impl TryFrom<&HttpRequest> for AddAccountCommand {
    type Error = FieldError;

    fn try_from(request: &HttpRequest) -> Result<Self, Self::Error> {
        Ok(AddAccountCommand {
            name: request.text("name")?,
            email: request.text("email")?,
            password: request.text("password")?,
        })
    }
}

impl TryFrom<&HttpRequest> for Credentials {
    type Error = FieldError;

    fn try_from(request: &HttpRequest) -> Result<Self, Self::Error> {
        Ok(Credentials {
            email: request.text("email")?,
            password: request.text("password")?,
        })
    }
}
