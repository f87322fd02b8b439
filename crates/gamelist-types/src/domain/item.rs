use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single catalog entry.
///
/// Items are immutable once loaded; `title` doubles as the identity key
/// and must be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    /// Asset path relative to the image root (e.g. `zelda-botw.jpg`)
    pub image: String,
    pub genres: Vec<String>,
    pub rating: f64,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        image: impl Into<String>,
        genres: impl IntoIterator<Item = impl Into<String>>,
        rating: f64,
    ) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
            genres: genres.into_iter().map(Into::into).collect(),
            rating,
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Check the per-item invariants (title present, at least one genre,
    /// finite rating). Uniqueness is a catalog-level concern.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::invalid_catalog("item with empty title"));
        }
        if self.genres.is_empty() {
            return Err(Error::invalid_catalog(format!(
                "'{}' has no genres",
                self.title
            )));
        }
        if !self.rating.is_finite() {
            return Err(Error::invalid_catalog(format!(
                "'{}' has a non-finite rating",
                self.title
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_from_catalog_json() {
        let json = r#"{
            "title": "Hades",
            "image": "hades.jpg",
            "genres": ["Action", "Roguelike"],
            "rating": 9.3
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.title, "Hades");
        assert_eq!(item.genres, vec!["Action", "Roguelike"]);
        assert!(item.has_genre("Roguelike"));
        assert!(!item.has_genre("roguelike"));
    }

    #[test]
    fn test_integer_rating_is_accepted() {
        let json = r#"{"title": "Tetris", "image": "t.jpg", "genres": ["Puzzle"], "rating": 9}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating, 9.0);
    }

    #[test]
    fn test_validate_rejects_missing_genres() {
        let item = Item::new("Tetris", "t.jpg", Vec::<String>::new(), 9.0);
        assert!(matches!(item.validate(), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let item = Item::new("  ", "t.jpg", ["Puzzle"], 9.0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_rating() {
        let item = Item::new("Tetris", "t.jpg", ["Puzzle"], f64::NAN);
        assert!(item.validate().is_err());
    }
}
