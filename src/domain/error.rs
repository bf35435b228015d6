// Error taxonomy for dashboard store operations
use super::dashboard::Dashboard;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// No live document carries this id.
    #[error("dashboard not found: {id}")]
    NotFound { id: String },

    /// The target slug is already taken. Carries the document that owns it.
    #[error("dashboard already exists: {}", existing.slug)]
    AlreadyExists { existing: Box<Dashboard> },

    /// A file in the collection could not be parsed as a dashboard.
    #[error("malformed dashboard document {}: {source}", path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The name does not produce a usable slug.
    #[error("dashboard name {name:?} does not produce a valid slug")]
    InvalidName { name: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DashboardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The existing document when this is a collision, for "open existing" flows.
    pub fn existing(&self) -> Option<&Dashboard> {
        match self {
            Self::AlreadyExists { existing } => Some(existing.as_ref()),
            _ => None,
        }
    }
}
