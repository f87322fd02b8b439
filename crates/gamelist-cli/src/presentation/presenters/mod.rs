pub mod catalog;

pub use catalog::{Surface, present_browse_help, present_catalog_page, present_genre_list};
