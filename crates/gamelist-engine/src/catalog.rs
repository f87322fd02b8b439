use std::collections::HashSet;

use log::debug;
use once_cell::unsync::OnceCell;

use gamelist_types::{Error, Item, OutOfRange, Result, ViewParameters};

use crate::genres::extract_genres;
use crate::view::{DerivedView, compute_view_with};

/// The immutable source collection.
///
/// Construction validates item invariants once so the view pipeline can
/// treat every item as well-formed. The genre set is computed lazily and
/// memoized for the lifetime of the catalog.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    genres: OnceCell<Vec<String>>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut titles = HashSet::with_capacity(items.len());
        for item in &items {
            item.validate()?;
            if !titles.insert(item.title.as_str()) {
                return Err(Error::invalid_catalog(format!(
                    "duplicate title '{}'",
                    item.title
                )));
            }
        }

        debug!("catalog ready with {} items", items.len());

        Ok(Self {
            items,
            genres: OnceCell::new(),
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Genre filter options, first-seen order.
    pub fn genres(&self) -> &[String] {
        self.genres.get_or_init(|| extract_genres(&self.items))
    }

    pub fn view(&self, params: &ViewParameters) -> Result<DerivedView<'_>> {
        self.view_with(params, OutOfRange::Empty)
    }

    pub fn view_with(
        &self,
        params: &ViewParameters,
        policy: OutOfRange,
    ) -> Result<DerivedView<'_>> {
        compute_view_with(&self.items, params, policy)
    }
}
