pub mod api;
pub mod common;
pub mod models;
pub mod services;
pub mod wizard;
