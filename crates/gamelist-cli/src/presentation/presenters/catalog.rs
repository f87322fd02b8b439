use gamelist_engine::DerivedView;
use gamelist_types::{Item, ViewParameters};

use crate::presentation::view_models::{
    BrowseHelpViewModel, CatalogPageViewModel, CommandHelp, CommandResultViewModel,
    FilterSummary, GenreListViewModel, Guidance, ItemViewModel, PageStatus, StatusBadge,
};

const IMAGE_ROOT: &str = "/images/";

/// Where the result is shown; decides how suggested commands are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Cli,
    Browse,
}

impl Surface {
    fn first_page_command(self) -> &'static str {
        match self {
            Surface::Cli => "gamelist list --page 1",
            Surface::Browse => "page 1",
        }
    }

    fn clear_search_command(self) -> &'static str {
        match self {
            Surface::Cli => "gamelist list",
            Surface::Browse => "search",
        }
    }

    fn clear_genre_command(self) -> &'static str {
        match self {
            Surface::Cli => "gamelist list --genre all",
            Surface::Browse => "genre all",
        }
    }
}

fn present_item(item: &Item) -> ItemViewModel {
    ItemViewModel {
        title: item.title.clone(),
        image: format!("{}{}", IMAGE_ROOT, item.image),
        genres: item.genres.clone(),
        rating: item.rating,
    }
}

fn present_filters(params: &ViewParameters) -> FilterSummary {
    FilterSummary {
        search: (!params.search_term.is_empty()).then(|| params.search_term.clone()),
        genre: params.selected_genre.to_string(),
        sort: params.sort_key.to_string(),
        per_page: params.page_size.to_string(),
    }
}

pub fn present_catalog_page(
    view: &DerivedView<'_>,
    params: &ViewParameters,
    surface: Surface,
) -> CommandResultViewModel<CatalogPageViewModel> {
    let status = if view.is_empty_result() {
        PageStatus::NoMatches
    } else if view.is_out_of_range() {
        PageStatus::OutOfRange
    } else {
        PageStatus::Ok
    };

    let content = CatalogPageViewModel {
        filters: present_filters(params),
        items: view.visible_items.iter().map(|item| present_item(item)).collect(),
        page: view.current_page,
        page_count: view.page_count,
        page_size: view.page_size,
        filtered_count: view.filtered_count,
        total_count: view.total_count,
        status,
    };

    let mut result = CommandResultViewModel::new(content);

    match status {
        PageStatus::Ok => {}
        PageStatus::NoMatches => {
            result = result.with_badge(StatusBadge::warning("No games match"));
            if !params.search_term.is_empty() {
                result = result.with_suggestion(
                    Guidance::new("Clear the title search")
                        .with_command(surface.clear_search_command()),
                );
            }
            if !params.selected_genre.is_all() {
                result = result.with_suggestion(
                    Guidance::new("Show every genre").with_command(surface.clear_genre_command()),
                );
            }
        }
        PageStatus::OutOfRange => {
            result = result
                .with_badge(StatusBadge::warning(format!(
                    "Page {} of {} is empty",
                    view.current_page, view.page_count
                )))
                .with_suggestion(
                    Guidance::new("Go back to the first page")
                        .with_command(surface.first_page_command()),
                );
        }
    }

    result
}

pub fn present_genre_list(genres: &[String]) -> CommandResultViewModel<GenreListViewModel> {
    let mut options = Vec::with_capacity(genres.len() + 1);
    options.push("all".to_string());
    options.extend(genres.iter().cloned());

    CommandResultViewModel::new(GenreListViewModel {
        options,
        genre_count: genres.len(),
    })
    .with_badge(StatusBadge::info(format!("{} genres", genres.len())))
}

pub fn present_browse_help() -> CommandResultViewModel<BrowseHelpViewModel> {
    let commands = [
        ("search [TEXT]", "Filter titles (no text clears the search)"),
        ("genre NAME|all", "Filter by genre"),
        ("sort none|title|rating", "Change the sort key"),
        ("per-page N|all", "Change the page size (6, 10, all, ...)"),
        ("page N", "Jump to a page"),
        ("next / prev", "Move one page forward or back"),
        ("show", "Render the current page again"),
        ("genres", "List genre filter options"),
        ("quit", "Leave the session"),
    ]
    .into_iter()
    .map(|(usage, description)| CommandHelp {
        usage: usage.to_string(),
        description: description.to_string(),
    })
    .collect();

    CommandResultViewModel::new(BrowseHelpViewModel { commands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamelist_engine::compute_view;
    use gamelist_types::{GenreFilter, PageSize};

    fn items() -> Vec<Item> {
        vec![
            Item::new("Celeste", "celeste.jpg", ["Platformer", "Indie"], 9.4),
            Item::new("Hades", "hades.jpg", ["Action", "Indie"], 9.3),
        ]
    }

    #[test]
    fn test_items_get_image_root() {
        let items = items();
        let params = ViewParameters::default();
        let view = compute_view(&items, &params).unwrap();

        let result = present_catalog_page(&view, &params, Surface::Cli);

        assert_eq!(result.content.items[0].image, "/images/celeste.jpg");
        assert_eq!(result.content.status, PageStatus::Ok);
        assert!(result.badge.is_none());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_no_matches_suggests_clearing_filters() {
        let items = items();
        let params = ViewParameters::new()
            .search("mario")
            .genre(GenreFilter::genre("Indie"));
        let view = compute_view(&items, &params).unwrap();

        let result = present_catalog_page(&view, &params, Surface::Browse);

        assert_eq!(result.content.status, PageStatus::NoMatches);
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.suggestions[0].command.as_deref(), Some("search"));
        assert_eq!(result.suggestions[1].command.as_deref(), Some("genre all"));
    }

    #[test]
    fn test_out_of_range_suggests_first_page() {
        let items = items();
        let params = ViewParameters::new().page_size(PageSize::Fixed(1)).page(5);
        let view = compute_view(&items, &params).unwrap();

        let result = present_catalog_page(&view, &params, Surface::Cli);

        assert_eq!(result.content.status, PageStatus::OutOfRange);
        assert!(result.content.items.is_empty());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("gamelist list --page 1")
        );
    }

    #[test]
    fn test_filter_summary() {
        let params = ViewParameters::new().page_size(PageSize::All);
        let summary = present_filters(&params);

        assert!(summary.search.is_none());
        assert_eq!(summary.genre, "all");
        assert_eq!(summary.sort, "none");
        assert_eq!(summary.per_page, "all");
    }

    #[test]
    fn test_genre_list_starts_with_all() {
        let genres = vec!["RPG".to_string(), "Indie".to_string()];
        let result = present_genre_list(&genres);

        assert_eq!(result.content.options, vec!["all", "RPG", "Indie"]);
        assert_eq!(result.content.genre_count, 2);
    }
}
