pub mod item;
pub mod params;

pub use item::*;
pub use params::*;
