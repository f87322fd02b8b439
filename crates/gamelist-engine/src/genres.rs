use std::collections::HashSet;

use gamelist_types::Item;

/// Distinct genres across `items`, in first-seen order.
pub fn extract_genres(items: &[Item]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut genres = Vec::new();

    for item in items {
        for genre in &item.genres {
            if seen.insert(genre.as_str()) {
                genres.push(genre.clone());
            }
        }
    }

    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_genres_keeps_first_seen_order() {
        let items = vec![
            Item::new("A", "a.jpg", ["RPG", "Action"], 1.0),
            Item::new("B", "b.jpg", ["Puzzle", "RPG"], 2.0),
            Item::new("C", "c.jpg", ["Action"], 3.0),
        ];

        assert_eq!(extract_genres(&items), vec!["RPG", "Action", "Puzzle"]);
    }

    #[test]
    fn test_extract_genres_is_case_sensitive() {
        let items = vec![
            Item::new("A", "a.jpg", ["rpg"], 1.0),
            Item::new("B", "b.jpg", ["RPG"], 2.0),
        ];

        assert_eq!(extract_genres(&items), vec!["rpg", "RPG"]);
    }

    #[test]
    fn test_extract_genres_empty_catalog() {
        assert!(extract_genres(&[]).is_empty());
    }
}
