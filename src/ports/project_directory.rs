//! Project directory port - ecosystem project search.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::format::Project;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("the project directory is unavailable: {0}")]
    Unavailable(String),
}

/// Search over the curated ecosystem project catalog.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Projects matching a free-text query, best matches first.
    async fn search(&self, query: &str) -> Result<Vec<Project>, DirectoryError>;
}
