use std::fs;
use std::path::{Path, PathBuf};

use super::LauncherConfig;
use super::errors::ConfigError;

/// Status describing how the settings file was loaded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the settings file.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: LauncherConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(
        config: LauncherConfig,
        status: ConfigLoadStatus,
    ) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (LauncherConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

pub(crate) fn save_config(config: &LauncherConfig) -> Result<(), ConfigError> {
    save_config_to_path(&config_path(), config)
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                LauncherConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<LauncherConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            LauncherConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_config_to_path(
    path: &Path,
    config: &LauncherConfig,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(config)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("lantern")
            .join("settings.json");
    }

    std::env::temp_dir().join("lantern").join("settings.json")
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        ConfigLoadStatus, LauncherConfig, load_config_from_path,
        save_config_to_path,
    };

    #[test]
    fn given_valid_config_when_save_and_load_then_round_trip_matches() {
        let root = test_temp_dir("round_trip");
        let path = root.join("settings.json");
        let mut config = LauncherConfig::default();
        config.base_dir = PathBuf::from("/srv/lantern");
        config.carousel.display_ms = 5000;
        config.auto_refresh_secs = 120;

        save_config_to_path(&path, &config)
            .expect("config should save successfully");
        let (loaded, status) = load_config_from_path(&path)
            .expect("config should load successfully")
            .into_parts();

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(loaded, config);
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_load_then_returns_defaults_with_missing_status()
    {
        let root = test_temp_dir("missing");
        let path = root.join("settings.json");

        let (loaded, status) = load_config_from_path(&path)
            .expect("missing config should not fail")
            .into_parts();

        assert_eq!(status, ConfigLoadStatus::Missing);
        assert_eq!(loaded, LauncherConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid");
        let path = root.join("settings.json");
        fs::write(&path, "{ not json").expect("fixture should be written");

        let (loaded, status) = load_config_from_path(&path)
            .expect("invalid config should not fail")
            .into_parts();

        assert!(matches!(status, ConfigLoadStatus::Invalid(_)));
        assert_eq!(loaded, LauncherConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_partial_json_when_load_then_missing_fields_use_defaults() {
        let root = test_temp_dir("partial");
        let path = root.join("settings.json");
        fs::write(&path, r#"{ "carousel": { "display_ms": 3000 } }"#)
            .expect("fixture should be written");

        let (loaded, status) = load_config_from_path(&path)
            .expect("partial config should load")
            .into_parts();

        assert_eq!(status, ConfigLoadStatus::Loaded);
        assert_eq!(loaded.carousel.display_ms, 3000);
        assert_eq!(loaded.carousel.transition_ms, 1000);
        assert_eq!(loaded.auto_refresh_secs, 60);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let root = std::env::temp_dir()
            .join(format!("lantern-config-{label}-{nanos}"));
        fs::create_dir_all(&root).expect("temporary directory should exist");
        root
    }
}
