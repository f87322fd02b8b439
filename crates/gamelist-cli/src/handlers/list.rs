use anyhow::Result;
use gamelist_engine::{Catalog, ViewAction, reduce};
use gamelist_types::{GenreFilter, OutOfRange, PageSize, ViewParameters, page_number};

use crate::config::ViewDefaults;
use crate::presentation::presenters::{Surface, present_catalog_page};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::SortArg;

#[derive(Debug, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub genre: Option<String>,
    pub sort: Option<SortArg>,
    pub per_page: Option<String>,
    pub page: Option<i64>,
    pub clamp: bool,
}

impl ListOptions {
    /// Command-line overrides as reducer actions, page selection last so it
    /// survives the reset the other actions trigger.
    pub fn actions(&self) -> Result<Vec<ViewAction>> {
        let mut actions = Vec::new();

        if let Some(search) = &self.search {
            actions.push(ViewAction::SetSearchTerm(search.clone()));
        }
        if let Some(genre) = &self.genre {
            actions.push(ViewAction::SetGenreFilter(GenreFilter::from(genre.clone())));
        }
        if let Some(sort) = self.sort {
            actions.push(ViewAction::SetSortKey(sort.into()));
        }
        if let Some(per_page) = &self.per_page {
            actions.push(ViewAction::SetPageSize(per_page.parse::<PageSize>()?));
        }
        if let Some(page) = self.page {
            actions.push(ViewAction::SetPage(page_number(page)?));
        }

        Ok(actions)
    }
}

pub fn build_parameters(defaults: &ViewDefaults, options: &ListOptions) -> Result<ViewParameters> {
    let mut params = defaults.initial_parameters();
    for action in options.actions()? {
        params = reduce(&params, action)?;
    }
    Ok(params)
}

pub fn handle(
    catalog: &Catalog,
    defaults: &ViewDefaults,
    renderer: &ConsoleRenderer,
    options: ListOptions,
) -> Result<()> {
    let params = build_parameters(defaults, &options)?;

    if let Some(genre) = params.selected_genre.as_genre()
        && !catalog.genres().iter().any(|g| g == genre)
    {
        log::warn!("genre '{}' does not appear in the catalog", genre);
    }

    let policy = if options.clamp {
        OutOfRange::ClampToLast
    } else {
        defaults.out_of_range
    };

    let view = catalog.view_with(&params, policy)?;
    renderer.render(present_catalog_page(&view, &params, Surface::Cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamelist_types::{Error, SortKey};

    #[test]
    fn test_no_options_keeps_defaults() {
        let params = build_parameters(&ViewDefaults::default(), &ListOptions::default()).unwrap();
        assert_eq!(params, ViewParameters::default());
    }

    #[test]
    fn test_page_survives_other_overrides() {
        let options = ListOptions {
            search: Some("a".to_string()),
            genre: Some("Indie".to_string()),
            sort: Some(SortArg::Title),
            per_page: Some("2".to_string()),
            page: Some(2),
            clamp: false,
        };

        let params = build_parameters(&ViewDefaults::default(), &options).unwrap();

        assert_eq!(params.search_term, "a");
        assert_eq!(params.selected_genre, GenreFilter::genre("Indie"));
        assert_eq!(params.sort_key, SortKey::Title);
        assert_eq!(params.page_size, PageSize::Fixed(2));
        assert_eq!(params.current_page, 2);
    }

    #[test]
    fn test_negative_values_are_invalid_parameters() {
        let options = ListOptions {
            per_page: Some("-6".to_string()),
            ..Default::default()
        };
        let err = build_parameters(&ViewDefaults::default(), &options).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidParameter(_))
        ));

        let options = ListOptions {
            page: Some(0),
            ..Default::default()
        };
        assert!(build_parameters(&ViewDefaults::default(), &options).is_err());
    }
}
