// Dashboards service - Use cases for managing dashboard documents
use crate::application::collaborators::Slugger;
use crate::application::dashboard_repository::DashboardRepository;
use crate::domain::dashboard::{Dashboard, DashboardSettings, NewDashboard};
use crate::domain::error::DashboardError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct DashboardsService {
    repository: Arc<dyn DashboardRepository>,
    slugger: Arc<dyn Slugger>,
}

impl DashboardsService {
    pub fn new(repository: Arc<dyn DashboardRepository>, slugger: Arc<dyn Slugger>) -> Self {
        Self { repository, slugger }
    }

    pub async fn list(&self) -> Result<Vec<Dashboard>, DashboardError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Dashboard, DashboardError> {
        self.repository
            .list()
            .await?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DashboardError::NotFound { id: id.to_string() })
    }

    /// First dashboard whose name matches exactly. Absence is not an error.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Dashboard>, DashboardError> {
        Ok(self
            .repository
            .list()
            .await?
            .into_iter()
            .find(|d| d.name == name))
    }

    /// Create a dashboard. `keep_id` preserves a caller-supplied id (re-import).
    ///
    /// Fails with `AlreadyExists` when the slug is taken, or when a kept id
    /// already belongs to another dashboard.
    pub async fn create(&self, data: NewDashboard, keep_id: bool) -> Result<Dashboard, DashboardError> {
        let slug = self.slug_for(&data.name)?;
        let _guard = self.repository.lock().await;

        if let Some(existing) = self.repository.find_by_slug(&slug).await? {
            tracing::info!(slug = %slug, existing_id = %existing.id, "dashboard already exists");
            return Err(DashboardError::AlreadyExists {
                existing: Box::new(existing),
            });
        }

        let id = match data.id {
            Some(id) if keep_id => {
                if let Some(existing) = self.repository.list().await?.into_iter().find(|d| d.id == id) {
                    tracing::info!(id = %id, existing_slug = %existing.slug, "dashboard id already in use");
                    return Err(DashboardError::AlreadyExists {
                        existing: Box::new(existing),
                    });
                }
                id
            }
            _ => Uuid::new_v4().to_string(),
        };
        let path = self.repository.relative_path(&slug);
        let dashboard = Dashboard::new(id, slug, data.name, data.description, path);

        self.repository.save(&dashboard).await?;
        tracing::info!(id = %dashboard.id, slug = %dashboard.slug, "created dashboard");

        Ok(dashboard)
    }

    /// Rename and update a dashboard in place.
    ///
    /// A rename onto a slug owned by another document fails with
    /// `AlreadyExists` and leaves both files untouched. `report_ids` from
    /// the settings only replace the stored list when they hold the same
    /// reports; any membership change is dropped.
    pub async fn rename_and_update(
        &self,
        current_id: &str,
        new_settings: DashboardSettings,
    ) -> Result<Dashboard, DashboardError> {
        let new_slug = self.slug_for(&new_settings.name)?;
        let _guard = self.repository.lock().await;

        let mut dashboard = self.get(current_id).await?;
        let old_slug = dashboard.slug.clone();

        if new_slug != old_slug {
            if let Some(existing) = self.repository.find_by_slug(&new_slug).await? {
                tracing::info!(
                    id = %current_id,
                    slug = %new_slug,
                    existing_id = %existing.id,
                    "rename rejected, target slug taken"
                );
                return Err(DashboardError::AlreadyExists {
                    existing: Box::new(existing),
                });
            }
        }

        dashboard.path = self.repository.relative_path(&new_slug);
        dashboard.slug = new_slug;
        dashboard.name = new_settings.name;
        dashboard.description = new_settings.description.unwrap_or_default();

        if !dashboard.reorder_reports(&new_settings.report_ids) {
            tracing::debug!(
                id = %dashboard.id,
                "report membership differs from stored list, keeping stored reports"
            );
        }

        // Write the new document before dropping the old one so a failed
        // write never loses the dashboard.
        self.repository.save(&dashboard).await?;
        if dashboard.slug != old_slug {
            self.repository.remove(&old_slug).await?;
        }

        tracing::info!(id = %dashboard.id, from = %old_slug, to = %dashboard.slug, "updated dashboard");
        Ok(dashboard)
    }

    /// Delete a dashboard, returning its last stored state.
    pub async fn delete(&self, id: &str) -> Result<Dashboard, DashboardError> {
        let _guard = self.repository.lock().await;
        let dashboard = self.get(id).await?;

        if !self.repository.remove(&dashboard.slug).await? {
            return Err(DashboardError::NotFound { id: id.to_string() });
        }

        tracing::info!(id = %dashboard.id, slug = %dashboard.slug, "deleted dashboard");
        Ok(dashboard)
    }

    pub async fn add_report(&self, dashboard_id: &str, report_id: &str) -> Result<Dashboard, DashboardError> {
        let _guard = self.repository.lock().await;
        let mut dashboard = self.get(dashboard_id).await?;

        if dashboard.add_report(report_id) {
            self.repository.save(&dashboard).await?;
            tracing::info!(id = %dashboard.id, report_id = %report_id, "added report to dashboard");
        }

        Ok(dashboard)
    }

    pub async fn remove_report(&self, dashboard_id: &str, report_id: &str) -> Result<Dashboard, DashboardError> {
        let _guard = self.repository.lock().await;
        let mut dashboard = self.get(dashboard_id).await?;

        if dashboard.remove_report(report_id) {
            self.repository.save(&dashboard).await?;
            tracing::info!(id = %dashboard.id, report_id = %report_id, "removed report from dashboard");
        }

        Ok(dashboard)
    }

    fn slug_for(&self, name: &str) -> Result<String, DashboardError> {
        let slug = self.slugger.slug(name);
        if slug.is_empty() {
            return Err(DashboardError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(slug)
    }
}
