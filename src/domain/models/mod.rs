pub mod account;
pub mod jsonwebtoken;
