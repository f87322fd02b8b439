use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Sort key applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep dataset order
    #[default]
    None,
    Title,
    Rating,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::None => write!(f, "none"),
            SortKey::Title => write!(f, "title"),
            SortKey::Rating => write!(f, "rating"),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "title" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            other => Err(Error::invalid_parameter(format!(
                "unknown sort key '{}' (expected none, title or rating)",
                other
            ))),
        }
    }
}

/// Single-genre filter. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    pub fn genre(name: impl Into<String>) -> Self {
        GenreFilter::from(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }

    pub fn as_genre(&self) -> Option<&str> {
        match self {
            GenreFilter::All => None,
            GenreFilter::Genre(name) => Some(name),
        }
    }
}

impl From<String> for GenreFilter {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            GenreFilter::All
        } else {
            GenreFilter::Genre(trimmed.to_string())
        }
    }
}

impl From<GenreFilter> for String {
    fn from(value: GenreFilter) -> Self {
        match value {
            GenreFilter::All => "all".to_string(),
            GenreFilter::Genre(name) => name,
        }
    }
}

impl FromStr for GenreFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(GenreFilter::from(s.to_string()))
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => write!(f, "all"),
            GenreFilter::Genre(name) => write!(f, "{}", name),
        }
    }
}

/// Number of items per page.
///
/// `All` resolves to the size of the whole catalog at computation time, so
/// a single page holds every filtered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Fixed(usize),
    All,
}

impl PageSize {
    pub const SMALL: PageSize = PageSize::Fixed(6);
    pub const LARGE: PageSize = PageSize::Fixed(10);

    /// Build a fixed page size from a user-supplied count.
    pub fn from_count(count: i64) -> Result<Self> {
        if count <= 0 {
            return Err(Error::invalid_parameter(format!(
                "page size must be at least 1, got {}",
                count
            )));
        }
        usize::try_from(count).map(PageSize::Fixed).map_err(|_| {
            Error::invalid_parameter(format!("page size {} is too large", count))
        })
    }

    /// Concrete page size for a catalog of `catalog_len` items.
    pub fn resolve(self, catalog_len: usize) -> usize {
        match self {
            PageSize::Fixed(n) => n,
            PageSize::All => catalog_len.max(1),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::SMALL
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Fixed(n) => write!(f, "{}", n),
            PageSize::All => write!(f, "all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        let count: i64 = s.parse().map_err(|_| {
            Error::invalid_parameter(format!(
                "page size must be a positive integer or 'all', got '{}'",
                s
            ))
        })?;
        PageSize::from_count(count)
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PageSize::Fixed(n) => serializer.serialize_u64(*n as u64),
            PageSize::All => serializer.serialize_str("all"),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Config files write either `per_page = 10` or `per_page = "all"`
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(i64),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => PageSize::from_count(n),
            Raw::Keyword(s) => s.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

/// Convert a user-supplied 1-based page number.
pub fn page_number(value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(Error::invalid_parameter(format!(
            "page must be at least 1, got {}",
            value
        )));
    }
    usize::try_from(value)
        .map_err(|_| Error::invalid_parameter(format!("page {} is too large", value)))
}

/// What to render when the requested page lies past the last page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutOfRange {
    /// Render an empty page
    #[default]
    #[serde(rename = "empty")]
    Empty,
    /// Render the last non-empty page instead
    #[serde(rename = "clamp")]
    ClampToLast,
}

/// Complete set of user-controlled inputs for one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewParameters {
    pub search_term: String,
    pub selected_genre: GenreFilter,
    pub sort_key: SortKey,
    pub page_size: PageSize,
    /// 1-based
    pub current_page: usize,
}

impl Default for ViewParameters {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_genre: GenreFilter::All,
            sort_key: SortKey::None,
            page_size: PageSize::default(),
            current_page: 1,
        }
    }
}

impl ViewParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn genre(mut self, genre: GenreFilter) -> Self {
        self.selected_genre = genre;
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Reject values no computation can be based on.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == PageSize::Fixed(0) {
            return Err(Error::invalid_parameter("page size must be at least 1, got 0"));
        }
        if self.current_page == 0 {
            return Err(Error::invalid_parameter("page must be at least 1, got 0"));
        }
        Ok(())
    }
}
