use log::debug;
use serde::Serialize;

use gamelist_types::{Item, OutOfRange, Result, ViewParameters};

use crate::filter::apply_filters;
use crate::paginate::{page_count, page_slice};
use crate::sort::sort_items;

/// Output of one pass through the view pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<'a> {
    pub visible_items: Vec<&'a Item>,
    pub page_count: usize,
    /// Page the items were sliced from (the requested page unless clamped)
    pub current_page: usize,
    /// Resolved page size (`All` becomes the catalog length)
    pub page_size: usize,
    pub filtered_count: usize,
    pub total_count: usize,
}

impl DerivedView<'_> {
    /// Nothing matched the filters at all.
    pub fn is_empty_result(&self) -> bool {
        self.filtered_count == 0
    }

    /// Items matched, but the current page lies past the last page.
    pub fn is_out_of_range(&self) -> bool {
        self.filtered_count > 0 && self.current_page > self.page_count
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.page_count
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }
}

/// Derive the visible page for `params`. Out-of-range pages render empty.
pub fn compute_view<'a>(items: &'a [Item], params: &ViewParameters) -> Result<DerivedView<'a>> {
    compute_view_with(items, params, OutOfRange::Empty)
}

pub fn compute_view_with<'a>(
    items: &'a [Item],
    params: &ViewParameters,
    policy: OutOfRange,
) -> Result<DerivedView<'a>> {
    params.validate()?;

    let page_size = params.page_size.resolve(items.len());

    let mut filtered = apply_filters(items, params);
    // Page count comes from the filtered set before sorting and slicing
    let pages = page_count(filtered.len(), page_size);
    sort_items(&mut filtered, params.sort_key);

    let current_page = match policy {
        OutOfRange::ClampToLast if pages > 0 && params.current_page > pages => pages,
        _ => params.current_page,
    };

    let visible_items = page_slice(&filtered, current_page, page_size).to_vec();

    debug!(
        "view: search={:?} genre={} sort={} page={}/{} size={} -> {} of {} matched",
        params.search_term,
        params.selected_genre,
        params.sort_key,
        current_page,
        pages,
        page_size,
        visible_items.len(),
        filtered.len()
    );

    Ok(DerivedView {
        visible_items,
        page_count: pages,
        current_page,
        page_size,
        filtered_count: filtered.len(),
        total_count: items.len(),
    })
}
