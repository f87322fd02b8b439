use anyhow::{Context, Result};
use gamelist_engine::Catalog;
use gamelist_types::Item;
use std::path::Path;

/// Catalog compiled into the binary, used when no file is configured.
const BUILTIN_CATALOG: &str = include_str!("../data/games.json");

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let items: Vec<Item> = serde_json::from_str(json).context("Malformed catalog JSON")?;
    Ok(Catalog::new(items)?)
}

/// Load the catalog from `path`, or the built-in one when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            parse_catalog(&content)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?
        }
        None => parse_catalog(BUILTIN_CATALOG).context("Built-in catalog is invalid")?,
    };

    log::info!(
        "catalog loaded: {} items, {} genres",
        catalog.len(),
        catalog.genres().len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.genres()[0], "Action");
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("games.json");
        std::fs::write(
            &path,
            r#"[{"title": "Tetris", "image": "tetris.png", "genres": ["Puzzle"], "rating": 9}]"#,
        )?;

        let catalog = load_catalog(Some(&path))?;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].rating, 9.0);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_catalog(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_duplicate_titles_are_reported() {
        let json = r#"[
            {"title": "Hades", "image": "a.jpg", "genres": ["Action"], "rating": 9.3},
            {"title": "Hades", "image": "b.jpg", "genres": ["Action"], "rating": 9.3}
        ]"#;

        let err = parse_catalog(json).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate title 'Hades'"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_catalog("{not json").is_err());
    }
}
