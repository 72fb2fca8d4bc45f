pub mod account;
pub mod log;
pub mod repository;
