//! Request handlers

pub mod health;
pub mod branding;
pub mod driver;
pub mod admin;
