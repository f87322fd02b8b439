use std::cmp::Ordering;

use feruca::Collator;

use gamelist_types::{Item, SortKey};

/// Locale-aware title comparison using the root-locale Unicode collation.
///
/// Accents and case only matter once the base letters tie, so "Éa" sorts
/// before "Fez" and "doom" before "Doom".
pub fn collate_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// Stable in-place sort. Equal keys keep their relative input order.
pub fn sort_items(items: &mut [&Item], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Title => {
            let mut collator = Collator::default();
            items.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        // Total order: NaN sorts to an end instead of scrambling the rest
        SortKey::Rating => items.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(collate_titles("Zelda", "celeste"), Ordering::Greater);
    }

    #[test]
    fn test_collate_lowercase_before_uppercase_on_case_only_difference() {
        assert_eq!(collate_titles("doom", "Doom"), Ordering::Less);
        assert_eq!(collate_titles("Doom", "doom"), Ordering::Greater);
        assert_eq!(collate_titles("Doom", "Doom"), Ordering::Equal);
    }

    #[test]
    fn test_collate_prefix_sorts_first() {
        assert_eq!(collate_titles("Zelda", "Zelda II"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let a = Item::new("A", "a.jpg", ["X"], 9.0);
        let b = Item::new("B", "b.jpg", ["X"], 7.0);
        let c = Item::new("C", "c.jpg", ["X"], 9.0);
        let mut items = vec![&a, &b, &c];

        sort_items(&mut items, SortKey::Rating);

        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_none_keeps_input_order() {
        let a = Item::new("Zed", "a.jpg", ["X"], 1.0);
        let b = Item::new("Alpha", "b.jpg", ["X"], 2.0);
        let mut items = vec![&a, &b];

        sort_items(&mut items, SortKey::None);

        assert_eq!(items[0].title, "Zed");
    }

    #[test]
    fn test_sort_by_title() {
        let a = Item::new("super mario", "a.jpg", ["X"], 1.0);
        let b = Item::new("Celeste", "b.jpg", ["X"], 2.0);
        let c = Item::new("Hades", "c.jpg", ["X"], 3.0);
        let mut items = vec![&a, &b, &c];

        sort_items(&mut items, SortKey::Title);

        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Celeste", "Hades", "super mario"]);
    }

    #[test]
    fn test_collate_accented_titles_by_base_letter() {
        assert_eq!(collate_titles("Éa", "Fez"), Ordering::Less);
        assert_eq!(collate_titles("Ōkami", "Portal 2"), Ordering::Less);
        assert_eq!(collate_titles("Pokémon", "Pokemon Snap"), Ordering::Less);
    }

    #[test]
    fn test_sort_accented_titles() {
        let portal = Item::new("Portal 2", "a.jpg", ["X"], 1.0);
        let okami = Item::new("Ōkami", "b.jpg", ["X"], 1.0);
        let ea = Item::new("Éa", "c.jpg", ["X"], 1.0);
        let fez = Item::new("Fez", "d.jpg", ["X"], 1.0);
        let mut items = vec![&portal, &okami, &ea, &fez];

        sort_items(&mut items, SortKey::Title);

        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Éa", "Fez", "Ōkami", "Portal 2"]);
    }

    #[test]
    fn test_sort_by_rating_with_nan_keeps_others_ascending() {
        let owned: Vec<Item> = (0..200)
            .map(|i| {
                let rating = if i % 7 == 0 {
                    f64::NAN
                } else {
                    ((i * 37) % 100) as f64 / 10.0
                };
                Item::new(format!("Game {}", i), "g.jpg", ["X"], rating)
            })
            .collect();
        let mut items: Vec<&Item> = owned.iter().collect();

        sort_items(&mut items, SortKey::Rating);

        let ratings: Vec<f64> = items
            .iter()
            .map(|i| i.rating)
            .filter(|r| !r.is_nan())
            .collect();
        assert!(ratings.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(ratings.len(), 200 - 29);
    }
}
