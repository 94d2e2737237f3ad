use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SorterError};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# package-sorter configuration file
# Location: ~/.package-sorter/config.toml

[display]
# Unit label printed after dimensions and volume
# Default: "cm"
length_unit = "cm"

# Unit label printed after mass
# Default: "kg"
mass_unit = "kg"

# Output format for `classify` and `describe` when --json is not given
# Values: "text", "json"
# Default: "text"
format = "text"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_length_unit")]
    pub length_unit: String,

    #[serde(default = "default_mass_unit")]
    pub mass_unit: String,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_length_unit() -> String {
    "cm".to_string()
}

fn default_mass_unit() -> String {
    "kg".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            length_unit: default_length_unit(),
            mass_unit: default_mass_unit(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SorterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_matches('"').to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SorterError::InvalidConfigValue {
                key: "display.format".to_string(),
                value: s.to_string(),
                expected: "text, json".to_string(),
            }),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| SorterError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| SorterError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "display.length_unit" => Some(self.display.length_unit.clone()),
            "display.mass_unit" => Some(self.display.mass_unit.clone()),
            "display.format" => Some(self.display.format.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "display.length_unit" => {
                self.display.length_unit = parse_unit(key, value)?;
                Ok(())
            }
            "display.mass_unit" => {
                self.display.mass_unit = parse_unit(key, value)?;
                Ok(())
            }
            "display.format" => {
                self.display.format = value.parse()?;
                Ok(())
            }
            _ => Err(SorterError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["display.length_unit", "display.mass_unit", "display.format"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

/// Unit labels are free text but must not be blank
fn parse_unit(key: &str, value: &str) -> Result<String> {
    let unit = value.trim().trim_matches('"').trim_matches('\'');
    if unit.is_empty() {
        return Err(SorterError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a non-empty unit label".to_string(),
        });
    }
    Ok(unit.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.length_unit, "cm");
        assert_eq!(config.display.mass_unit, "kg");
        assert_eq!(config.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_init_template_parses_to_defaults() {
        let temp = TempDir::new().unwrap();
        let path = Config::init(temp.path()).unwrap();
        assert_eq!(path, Config::path(temp.path()));
        assert!(path.exists());

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.set("display.length_unit", "in").unwrap();
        config.set("display.format", "json").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = Config::load(temp.path()).unwrap();
        assert_eq!(loaded.display.length_unit, "in");
        assert_eq!(loaded.display.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            Config::path(temp.path()),
            "[display]\nmass_unit = \"lb\"\n",
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();
        assert_eq!(config.display.mass_unit, "lb");
        assert_eq!(config.display.length_unit, "cm");
    }

    #[test]
    fn test_malformed_file_is_config_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(Config::path(temp.path()), "[display\nformat = ").unwrap();

        let err = Config::load(temp.path()).unwrap_err();
        assert!(matches!(err, SorterError::ConfigParse { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("display.mass_unit", "\"lb\"").unwrap();
        assert_eq!(config.get("display.mass_unit").unwrap(), "lb");

        assert!(matches!(
            config.set("display.format", "yaml"),
            Err(SorterError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("display.length_unit", "  "),
            Err(SorterError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("profile.exclude", ".git"),
            Err(SorterError::ConfigKeyNotFound { .. })
        ));
        assert!(config.get("unknown").is_none());
    }

    #[test]
    fn test_list() {
        let keys: Vec<String> = Config::default().list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["display.length_unit", "display.mass_unit", "display.format"]
        );
    }
}
