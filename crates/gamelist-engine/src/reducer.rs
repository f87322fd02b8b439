use log::trace;
use serde::{Deserialize, Serialize};

use gamelist_types::{Error, GenreFilter, PageSize, Result, SortKey, ViewParameters};

/// A single user interaction. Each action changes exactly one parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    SetSearchTerm(String),
    SetGenreFilter(GenreFilter),
    SetSortKey(SortKey),
    SetPageSize(PageSize),
    SetPage(usize),
}

impl ViewAction {
    /// Every change except page selection invalidates the current page.
    pub fn resets_page(&self) -> bool {
        !matches!(self, ViewAction::SetPage(_))
    }
}

/// Apply `action` to `params`, returning the next parameter set.
///
/// The page reset lives here and nowhere else: any change to search, genre,
/// sort or page size moves the view back to page 1. Invalid values are
/// rejected and `params` is left untouched.
pub fn reduce(params: &ViewParameters, action: ViewAction) -> Result<ViewParameters> {
    let resets_page = action.resets_page();
    let mut next = params.clone();

    match action {
        ViewAction::SetSearchTerm(term) => next.search_term = term,
        ViewAction::SetGenreFilter(genre) => next.selected_genre = genre,
        ViewAction::SetSortKey(key) => next.sort_key = key,
        ViewAction::SetPageSize(size) => {
            if size == PageSize::Fixed(0) {
                return Err(Error::invalid_parameter("page size must be at least 1, got 0"));
            }
            next.page_size = size;
        }
        ViewAction::SetPage(page) => {
            if page == 0 {
                return Err(Error::invalid_parameter("page must be at least 1, got 0"));
            }
            next.current_page = page;
        }
    }

    if resets_page {
        next.current_page = 1;
    }

    trace!("reduced parameters: {:?}", next);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_three() -> ViewParameters {
        ViewParameters::new().page(3)
    }

    #[test]
    fn test_search_resets_page() {
        let next = reduce(&on_page_three(), ViewAction::SetSearchTerm("zel".into())).unwrap();
        assert_eq!(next.search_term, "zel");
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn test_genre_resets_page() {
        let next = reduce(
            &on_page_three(),
            ViewAction::SetGenreFilter(GenreFilter::genre("RPG")),
        )
        .unwrap();
        assert_eq!(next.selected_genre, GenreFilter::genre("RPG"));
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn test_sort_resets_page() {
        let next = reduce(&on_page_three(), ViewAction::SetSortKey(SortKey::Title)).unwrap();
        assert_eq!(next.sort_key, SortKey::Title);
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn test_page_size_resets_page() {
        let next = reduce(&on_page_three(), ViewAction::SetPageSize(PageSize::All)).unwrap();
        assert_eq!(next.page_size, PageSize::All);
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn test_set_page_keeps_other_parameters() {
        let params = ViewParameters::new()
            .search("mario")
            .genre(GenreFilter::genre("Platformer"))
            .sort(SortKey::Rating)
            .page_size(PageSize::LARGE);

        let next = reduce(&params, ViewAction::SetPage(2)).unwrap();

        assert_eq!(next, params.clone().page(2));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let params = on_page_three();
        assert!(matches!(
            reduce(&params, ViewAction::SetPage(0)),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            reduce(&params, ViewAction::SetPageSize(PageSize::Fixed(0))),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(params.current_page, 3);
    }

    #[test]
    fn test_same_value_still_resets_page() {
        let params = on_page_three().sort(SortKey::Title);
        let next = reduce(&params, ViewAction::SetSortKey(SortKey::Title)).unwrap();
        assert_eq!(next.current_page, 1);
    }

    #[test]
    fn test_action_serde_shape() {
        let json = serde_json::to_string(&ViewAction::SetPage(2)).unwrap();
        assert_eq!(json, r#"{"action":"set_page","value":2}"#);

        let action: ViewAction =
            serde_json::from_str(r#"{"action":"set_genre_filter","value":"all"}"#).unwrap();
        assert_eq!(action, ViewAction::SetGenreFilter(GenreFilter::All));
    }
}
