// File-backed repository: one JSON document per dashboard
use crate::application::collaborators::ProjectLayout;
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::Dashboard;
use crate::domain::error::DashboardError;
use crate::infrastructure::collection_lock::lock_for;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::OwnedMutexGuard;

#[derive(Debug, Clone)]
pub struct FileDashboardRepository {
    dir: PathBuf,
    relative_dir: PathBuf,
    extension: String,
}

impl FileDashboardRepository {
    pub fn for_project(project: &dyn ProjectLayout, collection: &str, extension: &str) -> Self {
        let dir = project.analyze_dir(collection);
        let relative_dir = dir
            .strip_prefix(project.root())
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| dir.clone());

        Self {
            dir,
            relative_dir,
            extension: extension.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn suffix(&self) -> String {
        format!(".dashboard.{}", self.extension)
    }

    fn file_path(&self, slug: &str) -> PathBuf {
        self.dir.join(Dashboard::file_name(slug, &self.extension))
    }

    /// Write `body` to a fresh file and flush it to disk before returning.
    async fn write_synced(path: &Path, body: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(body).await?;
        file.sync_all().await
    }

    /// Persist the directory entry after a rename.
    #[cfg(unix)]
    async fn sync_dir(&self) -> Result<(), DashboardError> {
        let dir = tokio::fs::File::open(&self.dir)
            .await
            .map_err(|e| DashboardError::io(&self.dir, e))?;
        dir.sync_all().await.map_err(|e| DashboardError::io(&self.dir, e))
    }

    // No directory handle to sync on this platform.
    #[cfg(not(unix))]
    async fn sync_dir(&self) -> Result<(), DashboardError> {
        Ok(())
    }

    async fn read_document(path: &Path) -> Result<Option<Dashboard>, DashboardError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DashboardError::io(path, e)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| DashboardError::MalformedDocument {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[async_trait]
impl DashboardRepository for FileDashboardRepository {
    async fn list(&self) -> Result<Vec<Dashboard>, DashboardError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DashboardError::io(&self.dir, e)),
        };

        let suffix = self.suffix();
        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DashboardError::io(&self.dir, e))?
        {
            let path = entry.path();
            let is_document = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(&suffix) && !n.starts_with('.'));
            if is_document {
                paths.push(path);
            }
        }
        paths.sort();

        let mut dashboards = Vec::with_capacity(paths.len());
        for path in paths {
            // A file removed between the scan and the read is simply gone.
            if let Some(dashboard) = Self::read_document(&path).await? {
                dashboards.push(dashboard);
            }
        }

        tracing::debug!(dir = %self.dir.display(), count = dashboards.len(), "listed dashboards");
        Ok(dashboards)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Dashboard>, DashboardError> {
        Self::read_document(&self.file_path(slug)).await
    }

    async fn save(&self, dashboard: &Dashboard) -> Result<(), DashboardError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DashboardError::io(&self.dir, e))?;

        let path = self.file_path(&dashboard.slug);
        let tmp_path = self.dir.join(format!(
            ".{}.{}.tmp",
            Dashboard::file_name(&dashboard.slug, &self.extension),
            uuid::Uuid::new_v4().simple()
        ));

        let body = serde_json::to_vec(dashboard).map_err(|source| DashboardError::MalformedDocument {
            path: path.clone(),
            source,
        })?;

        if let Err(e) = Self::write_synced(&tmp_path, &body).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(DashboardError::io(&tmp_path, e));
        }

        if let Err(e) = tokio::fs::rename(&tmp_path, &path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(DashboardError::io(&path, e));
        }
        self.sync_dir().await?;

        tracing::debug!(path = %path.display(), "wrote dashboard document");
        Ok(())
    }

    async fn remove(&self, slug: &str) -> Result<bool, DashboardError> {
        let path = self.file_path(slug);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed dashboard document");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DashboardError::io(&path, e)),
        }
    }

    fn relative_path(&self, slug: &str) -> String {
        let file = self.relative_dir.join(Dashboard::file_name(slug, &self.extension));
        file.components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    async fn lock(&self) -> OwnedMutexGuard<()> {
        // The lock is keyed by canonical path, which needs the directory to exist.
        if let Err(e) = tokio::fs::create_dir_all(&self.dir).await {
            tracing::warn!(dir = %self.dir.display(), error = %e, "could not create collection directory");
        }
        lock_for(&self.dir).lock_owned().await
    }
}
