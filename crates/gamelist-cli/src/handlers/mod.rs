pub mod browse;
pub mod genres;
pub mod guidance;
pub mod list;
