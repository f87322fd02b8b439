//! Custom assertions over the `--format json` envelope.
//!
//! Page results look like `{"content": {"items": [...], "page": 1, "page_count": 2, ...}}`.

use anyhow::{Context, Result};
use serde_json::Value;

fn items(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")
}

/// Titles of the visible items, in display order.
pub fn titles(json: &Value) -> Result<Vec<String>> {
    items(json)?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item["title"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Item {} missing title", i))
        })
        .collect()
}

/// Assert that the page shows the expected number of items.
pub fn assert_item_count(json: &Value, expected: usize) -> Result<()> {
    let count = items(json)?.len();
    if count != expected {
        anyhow::bail!("Expected {} items, got {}", expected, count);
    }
    Ok(())
}

/// Assert page number, page count and filtered count in one go.
pub fn assert_pagination(
    json: &Value,
    page: u64,
    page_count: u64,
    filtered_count: u64,
) -> Result<()> {
    let content = &json["content"];
    let actual = (
        content["page"].as_u64().context("Missing content.page")?,
        content["page_count"]
            .as_u64()
            .context("Missing content.page_count")?,
        content["filtered_count"]
            .as_u64()
            .context("Missing content.filtered_count")?,
    );

    if actual != (page, page_count, filtered_count) {
        anyhow::bail!(
            "Expected (page, page_count, filtered_count) = {:?}, got {:?}",
            (page, page_count, filtered_count),
            actual
        );
    }
    Ok(())
}

/// Assert that every visible item carries `genre`.
pub fn assert_all_items_have_genre(json: &Value, genre: &str) -> Result<()> {
    for (i, item) in items(json)?.iter().enumerate() {
        let genres = item["genres"]
            .as_array()
            .with_context(|| format!("Item {} missing genres", i))?;

        if !genres.iter().any(|g| g.as_str() == Some(genre)) {
            anyhow::bail!("Item {} ({}) lacks genre {}", i, item["title"], genre);
        }
    }
    Ok(())
}

/// Assert that visible ratings never decrease.
pub fn assert_ratings_ascending(json: &Value) -> Result<()> {
    let ratings: Vec<f64> = items(json)?
        .iter()
        .map(|item| item["rating"].as_f64().context("Item missing rating"))
        .collect::<Result<_>>()?;

    if ratings.windows(2).any(|pair| pair[0] > pair[1]) {
        anyhow::bail!("Ratings are not ascending: {:?}", ratings);
    }
    Ok(())
}

/// Assert the `content.status` field (`ok`, `no_matches`, `out_of_range`).
pub fn assert_status(json: &Value, expected: &str) -> Result<()> {
    let status = json["content"]["status"]
        .as_str()
        .context("Expected 'content.status' in JSON")?;
    if status != expected {
        anyhow::bail!("Expected status {}, got {}", expected, status);
    }
    Ok(())
}
