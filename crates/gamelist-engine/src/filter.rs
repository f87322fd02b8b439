use gamelist_types::{GenreFilter, Item, ViewParameters};

/// Case-insensitive substring match on the title. An empty term matches everything.
pub fn matches_search(item: &Item, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(&term.to_lowercase())
}

pub fn matches_genre(item: &Item, filter: &GenreFilter) -> bool {
    match filter {
        GenreFilter::All => true,
        GenreFilter::Genre(name) => item.has_genre(name),
    }
}

/// Run the filter pipeline (search, then genre) and keep dataset order.
pub fn apply_filters<'a>(items: &'a [Item], params: &ViewParameters) -> Vec<&'a Item> {
    // Lowercase the term once instead of per item
    let term = params.search_term.to_lowercase();

    items
        .iter()
        .filter(|item| term.is_empty() || item.title.to_lowercase().contains(&term))
        .filter(|item| matches_genre(item, &params.selected_genre))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("The Legend of Zelda", "botw.jpg", ["Action", "Adventure"], 9.7),
            Item::new("Persona 5", "p5.jpg", ["RPG"], 9.5),
            Item::new("Zelda II", "z2.jpg", ["Action", "RPG"], 7.2),
            Item::new("Celeste", "celeste.jpg", ["Platformer"], 9.4),
        ]
    }

    fn titles(filtered: &[&Item]) -> Vec<String> {
        filtered.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = items();
        assert!(matches_search(&items[0], "ZEL"));
        assert!(matches_search(&items[0], "legend of"));
        assert!(!matches_search(&items[1], "zel"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let items = items();
        assert!(items.iter().all(|i| matches_search(i, "")));
    }

    #[test]
    fn test_genre_membership_is_exact() {
        let items = items();
        assert!(matches_genre(&items[2], &GenreFilter::genre("RPG")));
        assert!(!matches_genre(&items[2], &GenreFilter::genre("rpg")));
        assert!(matches_genre(&items[3], &GenreFilter::All));
    }

    #[test]
    fn test_filters_compose_search_then_genre() {
        let items = items();
        let params = ViewParameters::new()
            .search("zel")
            .genre(GenreFilter::genre("RPG"));

        assert_eq!(titles(&apply_filters(&items, &params)), vec!["Zelda II"]);
    }

    #[test]
    fn test_filters_preserve_dataset_order() {
        let items = items();
        let params = ViewParameters::new().genre(GenreFilter::genre("Action"));

        assert_eq!(
            titles(&apply_filters(&items, &params)),
            vec!["The Legend of Zelda", "Zelda II"]
        );
    }

    #[test]
    fn test_unknown_genre_yields_nothing() {
        let items = items();
        let params = ViewParameters::new().genre(GenreFilter::genre("Racing"));
        assert!(apply_filters(&items, &params).is_empty());
    }
}
