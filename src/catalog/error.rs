use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading or validating a role catalog
#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// Catalog file is not valid catalog JSON
    Parse(serde_json::Error),
    /// Catalog contains no roles
    Empty,
    /// Two roles share the same id
    DuplicateId(u32),
    /// A role has a blank name
    BlankName { id: u32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "Failed to read catalog '{}': {}", path.display(), source)
            }
            CatalogError::Parse(e) => write!(f, "Invalid catalog JSON: {e}"),
            CatalogError::Empty => write!(f, "Catalog must contain at least one role"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate role id {id} in catalog"),
            CatalogError::BlankName { id } => write!(f, "Role {id} has a blank name"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}
