use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub project: ProjectSettings,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProjectSettings {
    pub root: PathBuf,
    pub analyze_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// File extension of dashboard documents, without the leading dot.
    pub extension: String,
}

/// Defaults, then the optional file at `path`, then `DASHBOARDS__*` environment variables.
pub fn load_store_config_from(path: &Path) -> anyhow::Result<StoreConfig> {
    load_store_config_with_env(path, None)
}

/// Like [`load_store_config_from`], reading the environment layer from `env`
/// instead of the process environment when given.
pub fn load_store_config_with_env(
    path: &Path,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<StoreConfig> {
    let settings = config::Config::builder()
        .set_default("project.root", ".")?
        .set_default("project.analyze_dir", "analyze")?
        .set_default("store.extension", "m5o")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARDS")
                .prefix_separator("__")
                .separator("__")
                .source(env),
        )
        .build()
        .with_context(|| format!("failed to load store config from {}", path.display()))?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = load_store_config_from(&dir.path().join("store")).unwrap();

        assert_eq!(config.project.root, PathBuf::from("."));
        assert_eq!(config.project.analyze_dir, "analyze");
        assert_eq!(config.store.extension, "m5o");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(
            &path,
            "[project]\nroot = \"/srv/analytics\"\n\n[store]\nextension = \"json\"\n",
        )
        .unwrap();

        let config = load_store_config_from(&path).unwrap();

        assert_eq!(config.project.root, PathBuf::from("/srv/analytics"));
        assert_eq!(config.project.analyze_dir, "analyze");
        assert_eq!(config.store.extension, "json");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "[store]\nextension = \"json\"\n").unwrap();

        let env = config::Map::from([
            ("DASHBOARDS__STORE__EXTENSION".to_string(), "m5o".to_string()),
            ("DASHBOARDS__PROJECT__ANALYZE_DIR".to_string(), "model".to_string()),
            ("UNRELATED__STORE__EXTENSION".to_string(), "txt".to_string()),
        ]);
        let config = load_store_config_with_env(&path, Some(env)).unwrap();

        assert_eq!(config.store.extension, "m5o");
        assert_eq!(config.project.analyze_dir, "model");
        assert_eq!(config.project.root, PathBuf::from("."));
    }
}
