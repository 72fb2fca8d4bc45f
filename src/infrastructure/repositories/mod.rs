pub mod account;
pub mod log;
