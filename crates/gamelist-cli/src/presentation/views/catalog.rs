use std::fmt;

use crate::presentation::view_models::{
    BrowseHelpViewModel, CatalogPageViewModel, GenreListViewModel, PageStatus,
};

const TITLE_WIDTH: usize = 42;
const GENRES_WIDTH: usize = 28;

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

// --------------------------------------------------------
// Catalog Page View
// --------------------------------------------------------

pub struct CatalogPageView<'a> {
    data: &'a CatalogPageViewModel,
}

impl<'a> CatalogPageView<'a> {
    pub fn new(data: &'a CatalogPageViewModel) -> Self {
        Self { data }
    }

    fn render_filters(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let filters = &self.data.filters;
        match &filters.search {
            Some(term) => write!(f, "Search: \"{}\"", term)?,
            None => write!(f, "Search: (none)")?,
        }
        writeln!(
            f,
            " | Genre: {} | Sort: {} | Per page: {}",
            filters.genre, filters.sort, filters.per_page
        )
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<tw$} {:<gw$} {:<7} IMAGE",
            "TITLE",
            "GENRES",
            "RATING",
            tw = TITLE_WIDTH,
            gw = GENRES_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(TITLE_WIDTH + GENRES_WIDTH + 30))?;

        for item in &self.data.items {
            writeln!(
                f,
                "{:<tw$} {:<gw$} {:<7} {}",
                truncate(&item.title, TITLE_WIDTH),
                truncate(&item.genres.join(", "), GENRES_WIDTH),
                item.rating.to_string(),
                item.image,
                tw = TITLE_WIDTH,
                gw = GENRES_WIDTH
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for CatalogPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_filters(f)?;
        writeln!(f)?;

        match self.data.status {
            PageStatus::NoMatches => {
                writeln!(f, "No games match the current filters.")?;
            }
            PageStatus::OutOfRange => {
                writeln!(
                    f,
                    "Page {} is past the last page; nothing to show.",
                    self.data.page
                )?;
            }
            PageStatus::Ok => self.render_table(f)?,
        }

        writeln!(f)?;
        writeln!(
            f,
            "Page {} of {} ({} of {} games match)",
            self.data.page, self.data.page_count, self.data.filtered_count, self.data.total_count
        )
    }
}

// --------------------------------------------------------
// Genre List View
// --------------------------------------------------------

pub struct GenreListView<'a> {
    data: &'a GenreListViewModel,
}

impl<'a> GenreListView<'a> {
    pub fn new(data: &'a GenreListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for GenreListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Genre filter options:")?;
        for option in &self.data.options {
            writeln!(f, "  {}", option)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Browse Help View
// --------------------------------------------------------

pub struct BrowseHelpView<'a> {
    data: &'a BrowseHelpViewModel,
}

impl<'a> BrowseHelpView<'a> {
    pub fn new(data: &'a BrowseHelpViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for BrowseHelpView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Commands:")?;
        for cmd in &self.data.commands {
            writeln!(f, "  {:<20} {}", cmd.usage, cmd.description)?;
        }
        Ok(())
    }
}
