pub use catalog::*;
pub use images::*;
pub use publish::*;

mod catalog;
mod images;
mod publish;
