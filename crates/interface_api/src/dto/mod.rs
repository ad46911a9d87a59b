//! Request and response data transfer objects

pub mod reports;
pub mod admin;
