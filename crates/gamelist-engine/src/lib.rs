// Engine module - the catalog view-model
// Everything here is pure: a catalog plus view parameters in, a derived view out.
// Pipeline order: search -> genre -> page count -> sort -> page slice

pub mod catalog;
pub mod filter;
pub mod genres;
pub mod paginate;
pub mod reducer;
pub mod sort;
pub mod view;

pub use catalog::Catalog;
pub use filter::{apply_filters, matches_genre, matches_search};
pub use genres::extract_genres;
pub use paginate::{page_count, page_slice};
pub use reducer::{ViewAction, reduce};
pub use sort::{collate_titles, sort_items};
pub use view::{DerivedView, compute_view, compute_view_with};

pub use gamelist_types::{
    Error, GenreFilter, Item, OutOfRange, PageSize, Result, SortKey, ViewParameters,
};
