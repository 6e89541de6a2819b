use crate::catalog::PatternCatalog;
use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "SYMPTOM_TRIAGE_CONFIG";

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Remote analysis service tried before the local classifier.
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
    /// JSON catalog replacing the built-in patterns.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl AppConfig {
    /// Rejects settings that parse but cannot work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.base_url.trim().is_empty() {
                return Err(ConfigError::InvalidConfig("remote.base_url is empty".into()));
            }
            if remote.timeout_seconds == 0 {
                return Err(ConfigError::InvalidConfig(
                    "remote.timeout_seconds must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn load_catalog(&self) -> Result<Arc<PatternCatalog>, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Arc::new(PatternCatalog::load(path)?)),
            None => Ok(PatternCatalog::reference()),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Like `load_config`, but a missing file yields the defaults. Any other
/// failure, including malformed JSON, is returned.
pub fn load_or_default(path: &str) -> Result<AppConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!("Config file {} not found. Using defaults.", path);
            Ok(AppConfig::default())
        }
        other => other,
    }
}

/// Config file path from the environment, or the default.
pub fn config_path() -> String {
    config_path_from(|key| std::env::var(key).ok())
}

pub fn config_path_from<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CONFIG_PATH_ENV).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "symptom-triage-{}-{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(config.remote.is_none());
        assert!(config.catalog_path.is_none());
        assert_eq!(config.load_catalog().unwrap().len(), 10);
    }

    #[test]
    fn remote_timeout_defaults_to_ten_seconds() {
        let json = r#"{ "remote": { "base_url": "http://127.0.0.1:5002" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        let remote = config.remote.unwrap();
        assert_eq!(remote.base_url, "http://127.0.0.1:5002");
        assert_eq!(remote.timeout_seconds, 10);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let config = load_or_default("definitely/not/here.json").unwrap();
        assert!(config.remote.is_none());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn load_or_default_rejects_malformed_json() {
        let path = temp_file("trailing-comma", r#"{ "catalog_path": "custom.json", }"#);
        let err = load_or_default(path.to_str().unwrap()).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Json(_)), "{:?}", err);
    }

    #[test]
    fn load_or_default_reads_existing_file() {
        let json = r#"{ "remote": { "base_url": "http://localhost:5002", "timeout_seconds": 3 } }"#;
        let path = temp_file("valid", json);
        let config = load_or_default(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.remote.unwrap().timeout_seconds, 3);
    }

    #[test]
    fn zero_timeout_is_rejected_on_load() {
        let json = r#"{ "remote": { "base_url": "http://localhost:5002", "timeout_seconds": 0 } }"#;
        let path = temp_file("zero-timeout", json);
        let err = load_config(path.to_str().unwrap()).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::InvalidConfig(_)), "{:?}", err);
    }

    #[test]
    fn blank_base_url_is_rejected() {
        let config = AppConfig {
            remote: Some(RemoteConfig {
                base_url: "  ".into(),
                timeout_seconds: 5,
            }),
            catalog_path: None,
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn config_path_uses_override() {
        let path = config_path_from(|key| {
            assert_eq!(key, CONFIG_PATH_ENV);
            Some("/etc/triage/custom.json".to_string())
        });
        assert_eq!(path, "/etc/triage/custom.json");
    }

    #[test]
    fn config_path_defaults_without_override() {
        assert_eq!(config_path_from(|_| None), DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = AppConfig {
            remote: None,
            catalog_path: Some("definitely/not/here.json".into()),
        };
        assert!(config.load_catalog().is_err());
    }
}
