pub mod config;
pub mod models;
pub mod purchase;
pub mod services;
pub mod validators;
