//! Application configuration for BrandForge.
//!
//! User config lives at `~/.brandforge/brandforge.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrandForgeError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "brandforge.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".brandforge";

// ---------------------------------------------------------------------------
// Config structs (matching brandforge.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hero image generation settings.
    #[serde(default)]
    pub image: ImageConfig,

    /// Blueprint persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// `[image]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Set to false to always use the fallback hero image.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Name of the env var holding the API key (never store the key itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Base URL of the OpenAI-compatible images API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Image model to request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Requested resolution, `WxH`.
    #[serde(default = "default_size")]
    pub size: String,

    /// Upper bound on a single generation call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            model: default_model(),
            size: default_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_api_key_env() -> String {
    "OPENAI_API_KEY".into()
}
fn default_base_url() -> String {
    "https://api.openai.com".into()
}
fn default_model() -> String {
    "gpt-image-1".into()
}
fn default_size() -> String {
    "1024x1024".into()
}
fn default_timeout_secs() -> u64 {
    30
}

/// `[storage]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Set to false to skip persisting generated blueprints.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Database file. A leading `~/` is expanded to the home directory.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> String {
    "~/.brandforge/blueprints.db".into()
}

impl StorageConfig {
    /// Resolve `db_path`, expanding a leading `~/`.
    pub fn resolved_db_path(&self) -> Result<PathBuf> {
        expand_home(&self.db_path)
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.brandforge/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| BrandForgeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.brandforge/brandforge.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| BrandForgeError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        BrandForgeError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| BrandForgeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| BrandForgeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| BrandForgeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Read the image API key from the configured env var.
///
/// `None` means the image capability is unconfigured, which is not an error:
/// the visual stage falls back to a fixed image.
pub fn image_api_key(config: &ImageConfig) -> Option<String> {
    if !config.enabled {
        return None;
    }
    match std::env::var(&config.api_key_env) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        _ => {
            tracing::debug!(
                var = %config.api_key_env,
                "image API key not set, hero images will use the fallback"
            );
            None
        }
    }
}

fn expand_home(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir()
                .ok_or_else(|| BrandForgeError::config("could not determine home directory"))?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(path)),
    }
}
