pub use basic_info::*;
pub use client_config::*;
pub use client_id::*;
pub use product::*;
pub use section::*;
pub use section_config::*;
pub use section_data::*;

mod basic_info;
mod client_config;
mod client_id;
mod product;
mod section;
mod section_config;
mod section_data;
