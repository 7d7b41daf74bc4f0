use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the recipes JSON document
    pub data_file: PathBuf,
    /// Config file the values came from, if one was read
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing the config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut data_file = Self::default_data_file();
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            if let Some(file_data) = file_config.data_file {
                // Resolve relative paths against the config file's directory
                data_file = if file_data.is_relative() {
                    path.parent()
                        .map(|p| p.join(&file_data))
                        .unwrap_or(file_data)
                } else {
                    file_data
                };
            }
            config_file = Some(path);
        }

        // Apply environment variable overrides
        if let Ok(env_path) = std::env::var("RECIPEBOX_DATA_FILE") {
            data_file = PathBuf::from(env_path);
        }

        Ok(Self {
            data_file,
            config_file,
        })
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipebox")
            .join("config.yaml")
    }

    /// Default recipe document path (platform-specific data dir):
    /// - Linux: ~/.local/share/recipebox/recipes.json
    /// - macOS: ~/Library/Application Support/recipebox/recipes.json
    /// - Windows: %APPDATA%/recipebox/recipes.json
    pub fn default_data_file() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("recipebox")
            .join("recipes.json")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert!(config
            .data_file
            .to_string_lossy()
            .contains("recipes.json"));
        assert_eq!(config.config_file, None);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_file: /custom/path/recipes.json").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/custom/path/recipes.json"));
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_data_file_resolved_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_file: my-recipes.json").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.data_file, temp_dir.path().join("my-recipes.json"));
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "data_file: /from/file/recipes.json").unwrap();

        std::env::set_var("RECIPEBOX_DATA_FILE", "/from/env/recipes.json");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/from/env/recipes.json"));

        std::env::remove_var("RECIPEBOX_DATA_FILE");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
