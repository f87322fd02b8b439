pub mod catalog;
pub mod common;
pub mod result;

pub use catalog::*;
pub use common::*;
pub use result::*;
