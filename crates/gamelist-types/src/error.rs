use std::fmt;

/// Result type for gamelist-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or validating view inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A view parameter is outside its valid range (page size or page number)
    InvalidParameter(String),

    /// Catalog data violates an item invariant
    InvalidCatalog(String),
}

impl Error {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }

    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Error::InvalidCatalog(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidCatalog(msg) => write!(f, "Invalid catalog: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
