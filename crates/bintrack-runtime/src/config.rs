use crate::{Error, Result};
use bintrack_client::ClientOptions;
use bintrack_types::ViewKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const DATA_DIR_ENV: &str = "BINTRACK_PATH";
pub const SERVER_ENV: &str = "BINTRACK_SERVER";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BINTRACK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.bintrack (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("bintrack"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".bintrack"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Sent verbatim as the `Cookie` header. Sessions are issued by the server's login page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_secs: 30,
            session_cookie: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_view: ViewKind,
    pub thousands_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_view: ViewKind::Table,
            thousands_separator: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub bin_debounce_ms: u64,
    pub bin_min_chars: usize,
    pub product_debounce_ms: u64,
    pub product_min_chars: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            bin_debounce_ms: 200,
            bin_min_chars: 1,
            product_debounce_ms: 300,
            product_min_chars: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub ttl_ms: u64,
    pub config_redirect_delay_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 4500,
            config_redirect_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub display: DisplayConfig,
    pub autocomplete: AutocompleteConfig,
    pub notifications: NotificationConfig,
}

impl Config {
    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    /// Load `config.toml` from the data directory, falling back to defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&Self::path_in(data_dir))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply a server override. The explicit value wins over `BINTRACK_SERVER`.
    pub fn with_server_override(mut self, explicit: Option<&str>) -> Self {
        let from_env = std::env::var(SERVER_ENV).ok();
        if let Some(url) = explicit.map(str::to_string).or(from_env) {
            let url = url.trim();
            if !url.is_empty() {
                self.server.base_url = url.to_string();
            }
        }
        self
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::new(self.server.base_url.clone())
            .with_timeout(Duration::from_secs(self.server.timeout_secs))
            .with_session_cookie(self.server.session_cookie.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.autocomplete.product_debounce_ms, 300);
        assert_eq!(config.notifications.ttl_ms, 4500);
        assert_eq!(config.display.default_view, ViewKind::Table);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.server.base_url = "http://inventory.local:8080".to_string();
        config.server.session_cookie = Some("session=abc".to_string());
        config.display.default_view = ViewKind::Card;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load(temp_dir.path())?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(
            &config_path,
            "[display]\nthousands_separator = \".\"\n\n[autocomplete]\nbin_min_chars = 2\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.display.thousands_separator, ".");
        assert_eq!(config.display.default_view, ViewKind::Table);
        assert_eq!(config.autocomplete.bin_min_chars, 2);
        assert_eq!(config.autocomplete.bin_debounce_ms, 200);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[server\nbase_url = 1")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        Ok(())
    }

    #[test]
    fn test_explicit_server_override_wins() {
        let config = Config::default().with_server_override(Some("http://10.0.0.5:5000"));
        assert_eq!(config.server.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.client_options().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_resolve_explicit_data_dir() -> Result<()> {
        let dir = resolve_data_dir(Some("/tmp/bintrack-test"))?;
        assert_eq!(dir, PathBuf::from("/tmp/bintrack-test"));
        Ok(())
    }
}
