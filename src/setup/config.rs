//! Configuration for using this crate.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::error::YoutubeError;

/// The default path to the config file
pub const CONFIG_PATH: &str = "yt-stats.toml";

/// Environment variable that overrides [YoutubeConfig::api_key].
pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Placeholder written to fresh config files.
const API_KEY_PLACEHOLDER: &str = "put_api_key_here";

/// Settings read from [CONFIG_PATH].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// See [YoutubeConfig]
    pub youtube: YoutubeConfig,

    /// See [LoggingConfig]
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads [CONFIG_PATH]. See [Config::read_from].
    pub fn read() -> Result<Config, ConfigError> {
        Config::read_from(CONFIG_PATH)
    }

    /// Reads the config file at `path`.
    ///
    /// A missing file is created with [Config::default] values and reported as
    /// [ConfigError::MissingConfig], so the user only has to fill in the api key.
    /// A blank file is treated the same way but reported as [ConfigError::InvalidConfig].
    /// A file that doesn't parse is left untouched, the error names the offending key.
    /// Any other I/O failure is returned as is.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                write_file(path, &Config::default())?;
                return Err(ConfigError::MissingConfig {
                    action_msg: format!("Wrote defaults to {}.", path.display()),
                });
            }
            Err(e) => return Err(ConfigError::IoError(e)),
        };

        if content.trim().is_empty() {
            write_file(path, &Config::default())?;
            return Err(ConfigError::InvalidConfig {
                reason: format!("{} is empty, wrote defaults.", path.display()),
            });
        }

        serde_path_to_error::deserialize(toml::Deserializer::new(&content)).map_err(|error| {
            ConfigError::InvalidConfig {
                reason: error.to_string(),
            }
        })
    }

    /// Applies overrides from the process environment (currently only [API_KEY_VAR]).
    pub fn with_env(self) -> Self {
        let api_key = std::env::var(API_KEY_VAR).ok();
        self.with_api_key_override(api_key)
    }

    /// Replaces the api key if `api_key` is set and not blank.
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.youtube.api_key = key;
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube: YoutubeConfig {
                api_key: API_KEY_PLACEHOLDER.to_string(),
            },

            logging: LoggingConfig {
                console_debug: false,
                logs_enabled: false,
                log_dir: "logs".to_string(),
            },
        }
    }
}

/// Configs for the YouTube Data API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeConfig {
    /// Key used to authenticate api requests.
    #[serde(default)]
    api_key: String,
}

impl YoutubeConfig {
    /// Basic sanity check for if a key was given.
    pub fn api_key(&self) -> Result<&str, YoutubeError> {
        let key = self.api_key.trim();

        let is_empty = key.is_empty();
        let is_placeholder = key.contains(API_KEY_PLACEHOLDER);

        if is_empty || is_placeholder {
            Err(YoutubeError::MissingCredential)
        } else {
            Ok(key)
        }
    }
}

impl std::fmt::Debug for YoutubeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubeConfig")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Configs for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Print debug traces to console?
    pub console_debug: bool,
    /// Enable writing to log file?
    pub logs_enabled: bool,
    /// Directory to store log files
    pub log_dir: String,
}

/// Write the given config to `path`.
fn write_file(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(config).expect("config serialization can't fail");
    std::fs::write(path, content).map_err(ConfigError::IoError)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    /// A fresh directory and the config path inside it. The directory is removed on drop.
    fn temp_config() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        (dir, path)
    }

    #[test]
    fn missing_file_writes_default() {
        let (_dir, path) = temp_config();

        let err = Config::read_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfig { .. }));

        // The default file is readable afterwards.
        let config = Config::read_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn temp_dir_is_cleaned_up() {
        let (dir, path) = temp_config();
        let root = dir.path().to_path_buf();

        Config::read_from(&path).unwrap_err();
        assert!(path.exists());

        drop(dir);
        assert!(!root.exists());
    }

    #[test]
    fn empty_file_is_rewritten() {
        let (_dir, path) = temp_config();
        std::fs::write(&path, "  \n").unwrap();

        let err = Config::read_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig { .. }));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(API_KEY_PLACEHOLDER));
    }

    #[test]
    fn incomplete_file_is_left_alone() {
        let (_dir, path) = temp_config();
        let content = "[youtube]\napi_key = \"abc\"\n";
        std::fs::write(&path, content).unwrap();

        let err = Config::read_from(&path).unwrap_err();
        match err {
            ConfigError::InvalidConfig { reason } => assert!(reason.contains("logging")),
            other => panic!("expected invalid config, got {other:?}"),
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn reads_complete_file() {
        let (_dir, path) = temp_config();
        let content = r#"
[youtube]
api_key = "my-key"

[logging]
console_debug = true
logs_enabled = false
log_dir = "logs"
"#;
        std::fs::write(&path, content).unwrap();

        let config = Config::read_from(&path).unwrap();
        assert_eq!(config.youtube.api_key().unwrap(), "my-key");
        assert!(config.logging.console_debug);
    }

    #[test]
    fn placeholder_key_is_missing() {
        let config = Config::default();
        assert!(matches!(
            config.youtube.api_key(),
            Err(YoutubeError::MissingCredential)
        ));
    }

    #[test]
    fn env_key_overrides_file() {
        let config = Config::default().with_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.youtube.api_key().unwrap(), "from-env");
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let config = Config::default()
            .with_api_key_override(Some("from-file".to_string()))
            .with_api_key_override(Some("   ".to_string()))
            .with_api_key_override(None);
        assert_eq!(config.youtube.api_key().unwrap(), "from-file");
    }

    #[test]
    fn debug_hides_api_key() {
        let config = Config::default().with_api_key_override(Some("secret".to_string()));
        assert!(!format!("{config:?}").contains("secret"));
    }
}
