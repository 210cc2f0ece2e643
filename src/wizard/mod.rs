pub use basic_info_form::*;
pub use session::*;
pub use store::*;

pub mod machine;

mod basic_info_form;
mod session;
mod store;
