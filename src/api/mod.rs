pub use backend::*;
pub use client::*;

mod backend;
mod client;
