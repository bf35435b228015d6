// Command handlers - dispatch CLI commands to the dashboards service
use crate::domain::dashboard::{DashboardSettings, NewDashboard};
use crate::domain::error::DashboardError;
use crate::presentation::app_state::AppState;
use crate::presentation::cli::Command;
use serde_json::Value;

/// Exit code for a name collision; the existing document is printed.
pub const EXIT_ALREADY_EXISTS: i32 = 2;
pub const EXIT_FAILURE: i32 = 1;

/// Run one command and render its result as JSON.
pub async fn handle(state: &AppState, command: Command) -> Result<Value, DashboardError> {
    let service = &state.dashboards_service;

    let value = match command {
        Command::List => to_value(service.list().await?),
        Command::Get { id } => to_value(service.get(&id).await?),
        Command::GetByName { name } => to_value(service.get_by_name(&name).await?),
        Command::Create {
            name,
            description,
            id,
            keep_id,
        } => {
            let data = NewDashboard { id, name, description };
            to_value(service.create(data, keep_id).await?)
        }
        Command::Rename {
            id,
            name,
            description,
            reports,
        } => {
            let settings = DashboardSettings {
                name,
                description,
                report_ids: reports,
            };
            to_value(service.rename_and_update(&id, settings).await?)
        }
        Command::Delete { id } => to_value(service.delete(&id).await?),
        Command::AddReport { id, report_id } => to_value(service.add_report(&id, &report_id).await?),
        Command::RemoveReport { id, report_id } => {
            to_value(service.remove_report(&id, &report_id).await?)
        }
    };

    Ok(value)
}

/// Exit code and optional stdout payload for a failed command.
pub fn error_output(err: &DashboardError) -> (i32, Option<Value>) {
    match err.existing() {
        Some(existing) => (EXIT_ALREADY_EXISTS, Some(to_value(existing))),
        None => (EXIT_FAILURE, None),
    }
}

fn to_value<T: serde::Serialize>(data: T) -> Value {
    // Dashboards are plain strings and lists; serialization cannot fail.
    serde_json::to_value(data).unwrap_or(Value::Null)
}
