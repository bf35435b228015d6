// External collaborators consumed by the dashboards service
use crate::domain::slug::slugify;
use std::path::{Path, PathBuf};

/// Resolves collection directories inside a project.
pub trait ProjectLayout: Send + Sync {
    fn root(&self) -> &Path;

    /// Directory holding every document of the named collection.
    fn analyze_dir(&self, collection: &str) -> PathBuf;
}

/// Deterministic name to filesystem-safe token mapping.
pub trait Slugger: Send + Sync {
    fn slug(&self, name: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSlugger;

impl Slugger for DefaultSlugger {
    fn slug(&self, name: &str) -> String {
        slugify(name)
    }
}
