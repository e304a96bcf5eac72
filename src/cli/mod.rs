pub mod list;
pub mod matrix;
pub mod request;
pub mod transform;

pub use list::*;
pub use matrix::*;
pub use request::*;
pub use transform::*;
