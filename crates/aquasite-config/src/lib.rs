use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where the admin app finds the site API. Every field is optional in the
/// file; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API. `~` and `$VAR` are expanded on load.
    pub api_base_url: String,
    /// Collection holding the project pages, relative to the base URL.
    pub pages_path: String,
    /// Multipart upload endpoint, relative to the base URL.
    pub upload_path: String,
    /// Object storage folder new assets are placed in.
    pub upload_folder: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            pages_path: "project-pages".to_string(),
            upload_path: "uploads".to_string(),
            upload_folder: "paginas".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the API base URL
        config.api_base_url = Self::expand(&config.api_base_url).unwrap_or(config.api_base_url);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Config for an API base URL given on the command line. Other settings
    /// come from the file at `config_path`. With no file there yet, the result
    /// is written to it so later runs reach the same API without the argument.
    pub fn override_api_base_url_at<P: AsRef<Path>>(
        config_path: P,
        url: &str,
    ) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        match Self::load_from_path(config_path)? {
            Some(config) => Ok(config.with_api_base_url(url)),
            None => {
                let config = Config::default().with_api_base_url(url);
                config.save_to_path(config_path)?;
                Ok(config)
            }
        }
    }

    pub fn override_api_base_url(url: &str) -> anyhow::Result<Self> {
        Self::override_api_base_url_at(Self::config_path(), url)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/aquasite");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.api_base_url = Self::expand(&url).unwrap_or(url);
        self
    }

    /// Zero falls back to the default.
    pub fn request_timeout(&self) -> Duration {
        match self.request_timeout_secs {
            0 => Duration::from_secs(Config::default().request_timeout_secs),
            secs => Duration::from_secs(secs),
        }
    }

    fn expand(value: &str) -> Option<String> {
        match shellexpand::full(value) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/aquasite/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            api_base_url: "https://api.example.org".to_string(),
            request_timeout_secs: 10,
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = toml::from_str(r#"api_base_url = "https://api.example.org""#).unwrap();

        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(config.pages_path, "project-pages");
        assert_eq!(config.upload_path, "uploads");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_expand_leaves_plain_urls_alone() {
        let url = "https://api.example.org/v1";
        assert_eq!(Config::expand(url).as_deref(), Some(url));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "request_timeout_secs = \"soon\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            upload_folder: "site/paginas".to_string(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_first_override_is_remembered() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("aquasite").join("config.toml");

        let config =
            Config::override_api_base_url_at(&config_file, "https://api.example.org").unwrap();
        let saved = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(saved, config);
    }

    #[test]
    fn test_override_leaves_existing_file_alone() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let on_disk = "api_base_url = \"https://api.example.org\"\nupload_folder = \"site\"\n";
        std::fs::write(&config_file, on_disk).unwrap();

        let config =
            Config::override_api_base_url_at(&config_file, "http://127.0.0.1:8080").unwrap();

        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.upload_folder, "site");
        assert_eq!(std::fs::read_to_string(&config_file).unwrap(), on_disk);
    }

    #[test]
    fn test_env_var_in_api_base_url() {
        unsafe {
            env::set_var("AQUASITE_TEST_API_HOST", "https://staging.example.org");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            r#"api_base_url = "$AQUASITE_TEST_API_HOST/api""#,
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.api_base_url, "https://staging.example.org/api");
        unsafe {
            env::remove_var("AQUASITE_TEST_API_HOST");
        }
    }

    #[test]
    fn test_override_base_url() {
        let config = Config::default().with_api_base_url("http://127.0.0.1:8080");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.pages_path, Config::default().pages_path);
    }
}
