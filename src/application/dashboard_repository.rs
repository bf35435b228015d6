// Repository trait for dashboard document access
use crate::domain::dashboard::Dashboard;
use crate::domain::error::DashboardError;
use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

/// Storage for one collection of dashboard documents, keyed by slug.
///
/// Every read goes back to the backing store; implementations must not cache.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// All documents in the collection, in a stable order.
    async fn list(&self) -> Result<Vec<Dashboard>, DashboardError>;

    /// The document stored under `slug`, if any
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Dashboard>, DashboardError>;

    /// Write the whole document under its slug, replacing any previous content atomically.
    async fn save(&self, dashboard: &Dashboard) -> Result<(), DashboardError>;

    /// Remove the document stored under `slug`. Returns false if nothing was there.
    async fn remove(&self, slug: &str) -> Result<bool, DashboardError>;

    /// Location of the document for `slug`, relative to the project root.
    fn relative_path(&self, slug: &str) -> String;

    /// Exclusive guard over the collection, held across check-then-write sequences.
    async fn lock(&self) -> OwnedMutexGuard<()>;
}
