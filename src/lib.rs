//! File-backed document store for dashboards.
//!
//! Each dashboard is one JSON file named `<slug>.dashboard.<ext>` inside a
//! collection directory resolved from the project root. [`DashboardsService`]
//! exposes the create/read/update/delete and report-membership operations.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dashboard_service::DashboardsService;
pub use domain::dashboard::{Dashboard, DashboardSettings, NewDashboard};
pub use domain::error::DashboardError;

/// Collection holding dashboard documents.
pub const DASHBOARDS_COLLECTION: &str = "dashboards";
