pub mod catalog;

pub use catalog::{BrowseHelpView, CatalogPageView, GenreListView};
