// Application state shared by command handlers
use crate::application::dashboard_service::DashboardsService;

#[derive(Clone)]
pub struct AppState {
    pub dashboards_service: DashboardsService,
}
