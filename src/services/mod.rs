pub mod account;
pub mod email;
pub mod hasher;
pub mod jsonwebtoken;
