use serde::Serialize;
use std::fmt;

use crate::presentation::views::{BrowseHelpView, CatalogPageView, GenreListView};

#[derive(Debug, Clone, Serialize)]
pub struct ItemViewModel {
    pub title: String,
    /// Resolved asset path (`/images/<file>`)
    pub image: String,
    pub genres: Vec<String>,
    pub rating: f64,
}

/// Active view parameters, as the user would type them back.
#[derive(Debug, Clone, Serialize)]
pub struct FilterSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub genre: String,
    pub sort: String,
    pub per_page: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Ok,
    NoMatches,
    OutOfRange,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogPageViewModel {
    pub filters: FilterSummary,
    pub items: Vec<ItemViewModel>,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub status: PageStatus,
}

impl fmt::Display for CatalogPageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CatalogPageView::new(self))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreListViewModel {
    /// Filter options in display order, starting with `all`
    pub options: Vec<String>,
    pub genre_count: usize,
}

impl fmt::Display for GenreListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", GenreListView::new(self))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BrowseHelpViewModel {
    pub commands: Vec<CommandHelp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandHelp {
    pub usage: String,
    pub description: String,
}

impl fmt::Display for BrowseHelpViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BrowseHelpView::new(self))
    }
}
