// Main entry point - Dependency injection and command dispatch
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dashboard_store::DASHBOARDS_COLLECTION;
use dashboard_store::application::collaborators::DefaultSlugger;
use dashboard_store::application::dashboard_service::DashboardsService;
use dashboard_store::infrastructure::config::load_store_config_from;
use dashboard_store::infrastructure::file_repository::FileDashboardRepository;
use dashboard_store::infrastructure::project::ProjectRoot;
use dashboard_store::presentation::app_state::AppState;
use dashboard_store::presentation::cli::Cli;
use dashboard_store::presentation::handlers::{error_output, handle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so stdout stays JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut store_config = load_store_config_from(&cli.config)?;
    if let Some(root) = cli.project_root {
        store_config.project.root = root;
    }

    // Create repository (infrastructure layer)
    let project = ProjectRoot::new(store_config.project.root, store_config.project.analyze_dir);
    let repository = Arc::new(FileDashboardRepository::for_project(
        &project,
        DASHBOARDS_COLLECTION,
        &store_config.store.extension,
    ));
    tracing::debug!(dir = %repository.dir().display(), "using dashboards collection");

    // Create service (application layer)
    let state = AppState {
        dashboards_service: DashboardsService::new(repository, Arc::new(DefaultSlugger)),
    };

    match handle(&state, cli.command).await {
        Ok(value) => {
            let rendered = serde_json::to_string_pretty(&value).context("failed to render output")?;
            println!("{}", rendered);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            let (code, payload) = error_output(&err);
            if let Some(existing) = payload {
                let rendered = serde_json::to_string_pretty(&existing).context("failed to render output")?;
                println!("{}", rendered);
            }
            process::exit(code);
        }
    }
}
