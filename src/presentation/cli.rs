// Command-line interface definition
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage dashboard documents in a project.
#[derive(Debug, Parser)]
#[command(name = "dashboards", about = "Manage dashboard documents in a project")]
pub struct Cli {
    /// Project root (overrides `project.root` from config).
    #[arg(long, global = true)]
    pub project_root: Option<PathBuf>,

    /// Store config file (extension optional).
    #[arg(long, global = true, default_value = "config/store")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every dashboard.
    List,

    /// Show a dashboard by id.
    Get { id: String },

    /// Show the first dashboard with this exact name, or null.
    GetByName { name: String },

    /// Create a dashboard.
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Id to keep when used with --keep-id.
        #[arg(long)]
        id: Option<String>,

        #[arg(long, requires = "id")]
        keep_id: bool,
    },

    /// Rename and update a dashboard.
    Rename {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Report ids in the desired order; repeat for each report.
        #[arg(long = "report")]
        reports: Vec<String>,
    },

    /// Delete a dashboard.
    Delete { id: String },

    /// Attach a report to a dashboard.
    AddReport { id: String, report_id: String },

    /// Detach a report from a dashboard.
    RemoveReport { id: String, report_id: String },
}
