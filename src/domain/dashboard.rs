// Dashboard domain model
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Schema version written into every newly created dashboard document.
pub const DASHBOARD_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub path: String,
    pub version: String,
    #[serde(default)]
    pub report_ids: Vec<String>,
}

/// Payload for creating a dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewDashboard {
    /// Only honored when the caller asks to keep it (re-import of an export).
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewDashboard {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Replacement settings for a rename/update call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSettings {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub report_ids: Vec<String>,
}

impl Dashboard {
    pub fn new(id: String, slug: String, name: String, description: Option<String>, path: String) -> Self {
        Self {
            id,
            slug,
            name,
            description: description.unwrap_or_default(),
            path,
            version: DASHBOARD_VERSION.to_string(),
            report_ids: Vec::new(),
        }
    }

    /// File name of the backing document: `<slug>.dashboard.<ext>`.
    pub fn file_name(slug: &str, extension: &str) -> String {
        format!("{}.dashboard.{}", slug, extension)
    }

    pub fn has_report(&self, report_id: &str) -> bool {
        self.report_ids.iter().any(|r| r == report_id)
    }

    /// Appends the report if absent. Returns whether the list changed.
    pub fn add_report(&mut self, report_id: &str) -> bool {
        if self.has_report(report_id) {
            return false;
        }
        self.report_ids.push(report_id.to_string());
        true
    }

    /// Removes the report if present. Returns whether the list changed.
    pub fn remove_report(&mut self, report_id: &str) -> bool {
        match self.report_ids.iter().position(|r| r == report_id) {
            Some(index) => {
                self.report_ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Takes the requested ordering only when it holds exactly the same
    /// reports as the stored list. A membership change is ignored.
    pub fn reorder_reports(&mut self, requested: &[String]) -> bool {
        let mut seen = HashSet::new();
        let requested: Vec<String> = requested
            .iter()
            .filter(|r| seen.insert(r.as_str()))
            .cloned()
            .collect();

        let current: HashSet<&str> = self.report_ids.iter().map(String::as_str).collect();
        if seen != current {
            return false;
        }

        self.report_ids = requested;
        true
    }
}
