pub use config::*;
pub use errors::*;

pub mod validation;

mod config;
mod errors;
