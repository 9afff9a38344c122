#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Missing required fields: {}", .missing.join(", "))]
    ValidationFailed { missing: Vec<String> },

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Duplicate project id: {0}")]
    DuplicateId(String),

    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    SeedParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
