// Project root resolver
use crate::application::collaborators::ProjectLayout;
use std::path::{Path, PathBuf};

/// A project on disk. Collections live under `<root>/<analyze_dir>/<collection>`.
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    root: PathBuf,
    analyze_dir: String,
}

impl ProjectRoot {
    pub fn new(root: impl Into<PathBuf>, analyze_dir: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            analyze_dir: analyze_dir.into(),
        }
    }
}

impl ProjectLayout for ProjectRoot {
    fn root(&self) -> &Path {
        &self.root
    }

    fn analyze_dir(&self, collection: &str) -> PathBuf {
        self.root.join(&self.analyze_dir).join(collection)
    }
}
