//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! discovery of the nearest `quill.toml` up the directory tree.
//!
//! Command-line overrides are passed to [`Config::load`] as [`CliSettings`].
//!
//! ## Environment variables
//!
//! Selected string values may reference the environment:
//!
//! - `${VAR}`: value of `VAR`; loading fails when it is unset
//! - `${VAR:-default}`: value of `VAR`, or `default` when unset
//!
//! Expanded fields:
//! - `api.base_url`
//! - `session.token_file`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Command-line values that take precedence over `quill.toml`.
///
/// `None` fields leave the loaded value alone.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override API base URL.
    pub api_url: Option<String>,
    /// Override token file location.
    pub token_file: Option<PathBuf>,
}

/// File name looked up during discovery.
const CONFIG_FILENAME: &str = "quill.toml";

/// Default token file, relative to the config directory.
const DEFAULT_TOKEN_FILE: &str = ".quill/token";

/// Quill configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REST API configuration.
    pub api: ApiConfig,
    /// Session configuration (paths are relative strings from TOML).
    session: SessionConfigRaw,
    /// Display configuration.
    pub display: DisplayConfig,

    /// Resolved session configuration (set after loading).
    #[serde(skip)]
    pub session_resolved: SessionConfig,
    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// REST API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend base URL (without the `/api` suffix).
    pub base_url: String,
    /// Global request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Raw session configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SessionConfigRaw {
    token_file: Option<String>,
}

/// Resolved session configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SessionConfig {
    /// File holding the persisted access token.
    pub token_file: PathBuf,
}

/// Display configuration for the reading view and the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of posts shown as featured cards on the home page.
    pub featured_posts: usize,
    /// Excerpt length of featured cards, in characters.
    pub featured_excerpt_length: usize,
    /// Excerpt length of regular cards, in characters.
    pub card_excerpt_length: usize,
    /// Number of posts in the dashboard's recent list.
    pub recent_posts: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            featured_posts: 2,
            featured_excerpt_length: 150,
            card_excerpt_length: 100,
            recent_posts: 5,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`api.base_url`").
        field: String,
        /// Error message (e.g., "${`QUILL_API_URL`} not set").
        message: String,
    },
}

/// Reject an empty string value.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject URLs that are not http or https.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a numeric field to be positive.
fn require_positive(value: u64, field: &str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation(format!(
            "{field} must be greater than 0"
        )));
    }
    Ok(())
}

impl Config {
    /// Load the configuration, then apply command-line overrides.
    ///
    /// An explicit `config_path` must exist. Without one the nearest
    /// `quill.toml` is used, or defaults when there is none.
    ///
    /// Overrides are applied after path resolution and the result is
    /// validated again.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Overwrite fields set in `settings`.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_url) = &settings.api_url {
            self.api.base_url.clone_from(api_url);
        }
        if let Some(token_file) = &settings.token_file {
            self.session_resolved.token_file.clone_from(token_file);
        }
    }

    /// Nearest `quill.toml` in the working directory or an ancestor.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Defaults rooted at the working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Defaults with relative paths resolved against `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfigRaw::default(),
            display: DisplayConfig::default(),
            session_resolved: SessionConfig {
                token_file: base.join(DEFAULT_TOKEN_FILE),
            },
            config_path: None,
        }
    }

    /// Parse, expand and resolve one config file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Paths may come from the environment, so expand first
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Check values that would only fail later, at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_api()?;
        self.validate_display()?;
        Ok(())
    }

    fn validate_api(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api.base_url, "api.base_url")?;
        require_http_url(&self.api.base_url, "api.base_url")?;
        require_positive(self.api.timeout_secs, "api.timeout_secs")?;
        Ok(())
    }

    fn validate_display(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        require_positive(
            display.featured_excerpt_length as u64,
            "display.featured_excerpt_length",
        )?;
        require_positive(
            display.card_excerpt_length as u64,
            "display.card_excerpt_length",
        )?;
        Ok(())
    }

    /// Expand `${...}` references in `api.base_url` and `session.token_file`.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.api.base_url = expand::expand_env(&self.api.base_url, "api.base_url")?;

        if let Some(ref token_file) = self.session.token_file {
            self.session.token_file =
                Some(expand::expand_env(token_file, "session.token_file")?);
        }

        Ok(())
    }

    /// Anchor relative paths at the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let token_file = self
            .session
            .token_file
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_FILE);

        self.session_resolved = SessionConfig {
            token_file: config_dir.join(token_file),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.api.base_url, "http://localhost:8001");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(
            config.session_resolved.token_file,
            PathBuf::from("/test/.quill/token")
        );
        assert_eq!(config.display.featured_posts, 2);
        assert_eq!(config.display.featured_excerpt_length, 150);
        assert_eq!(config.display.card_excerpt_length, 100);
        assert_eq!(config.display.recent_posts, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8001");
        assert_eq!(config.display.recent_posts, 5);
    }

    #[test]
    fn test_parse_api_config() {
        let toml = r#"
[api]
base_url = "https://blog.example.com"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://blog.example.com");
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn test_parse_display_config_partial() {
        let toml = r"
[display]
featured_posts = 3
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.display.featured_posts, 3);
        assert_eq!(config.display.featured_excerpt_length, 150);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[session]
token_file = "state/token"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.session_resolved.token_file,
            PathBuf::from("/project/state/token")
        );
    }

    #[test]
    fn test_resolve_paths_absolute_token_file() {
        let toml = r#"
[session]
token_file = "/var/lib/quill/token"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.session_resolved.token_file,
            PathBuf::from("/var/lib/quill/token")
        );
    }

    #[test]
    fn test_resolve_paths_default_token_file() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.session_resolved.token_file,
            PathBuf::from("/project/.quill/token")
        );
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let toml = r#"
[api]
base_url = "ftp://example.com"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let toml = r"
[api]
timeout_secs = 0
";
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_zero_excerpt_length() {
        let toml = r"
[display]
card_excerpt_length = 0
";
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("display.card_excerpt_length"));
    }

    #[test]
    fn test_apply_cli_settings_api_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            api_url: Some("https://api.example.com".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(
            config.session_resolved.token_file,
            PathBuf::from("/test/.quill/token")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_token_file() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            token_file: Some(PathBuf::from("/tmp/token")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.session_resolved.token_file,
            PathBuf::from("/tmp/token")
        );
        assert_eq!(config.api.base_url, "http://localhost:8001"); // Unchanged
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(
            &path,
            r#"
[api]
base_url = "${QUILL_TEST_SURELY_UNSET_VAR:-https://fallback.example.com}"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.api.base_url, "https://fallback.example.com");
        assert_eq!(config.config_path, Some(path));
        assert_eq!(
            config.session_resolved.token_file,
            dir.path().join(".quill/token")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/quill.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            api_url: Some("localhost:8001".to_owned()),
            ..Default::default()
        };

        let result = Config::load(Some(&path), Some(&overrides));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_config_from(nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }
}
