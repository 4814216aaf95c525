use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// API domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "https://api.pixelbin.io";

/// Shortest API secret accepted by [`PixelbinConfig::validate`].
pub const APPLICATION_MIN_TOKEN_LENGTH: usize = 8;

/// Environment variable overriding `api_secret`.
pub const ENV_API_SECRET: &str = "PIXELBIN_API_SECRET";
/// Environment variable overriding `domain`.
pub const ENV_DOMAIN: &str = "PIXELBIN_DOMAIN";

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

/// Client configuration loaded from `~/.config/pixelbin/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelbinConfig {
    /// Platform API domain, scheme included.
    #[serde(default = "default_domain")]
    pub domain: String,
    /// API secret token; used as the bearer credential by the transport layer.
    #[serde(default)]
    pub api_secret: String,
}

impl Default for PixelbinConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            api_secret: String::new(),
        }
    }
}

impl PixelbinConfig {
    /// Builds a validated config. `domain` falls back to [`DEFAULT_DOMAIN`].
    pub fn new(domain: Option<String>, api_secret: impl Into<String>) -> Result<Self, ConfigError> {
        let cfg = Self {
            domain: domain.unwrap_or_else(default_domain),
            api_secret: api_secret.into(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that an API secret is present and long enough.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_secret.is_empty() {
            return Err(ConfigError::InvalidCredential(
                "No API Secret Token Present".into(),
            ));
        }
        if self.api_secret.len() < APPLICATION_MIN_TOKEN_LENGTH {
            return Err(ConfigError::InvalidCredential(
                "Invalid API Secret Token".into(),
            ));
        }
        Ok(())
    }

    /// Token handed to the transport layer.
    pub fn access_token(&self) -> &str {
        &self.api_secret
    }

    /// Applies overrides from a variable lookup (normally the process environment).
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(secret) = lookup(ENV_API_SECRET).filter(|s| !s.is_empty()) {
            self.api_secret = secret;
        }
        if let Some(domain) = lookup(ENV_DOMAIN).filter(|s| !s.is_empty()) {
            self.domain = domain;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pixelbin")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|e| ConfigError::Io(xdg_dirs.get_config_home(), e))
}

/// Read configuration from `path` without touching the environment.
pub fn load_from(path: &Path) -> Result<PixelbinConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let cfg: PixelbinConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Write `cfg` to `path`, creating parent directories.
pub fn write_to(path: &Path, cfg: &PixelbinConfig) -> Result<(), ConfigError> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io(parent.to_path_buf(), e))?;
    }
    fs::write(path, toml).map_err(|e| ConfigError::Io(path.to_path_buf(), e))
}

/// Load configuration from disk, creating a default file if none exists.
/// Environment variables take precedence over file values. Not validated.
pub fn load_or_init() -> Result<PixelbinConfig, ConfigError> {
    let path = config_path()?;
    let cfg = if path.exists() {
        load_from(&path)?
    } else {
        let default_cfg = PixelbinConfig::default();
        write_to(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        default_cfg
    };
    Ok(cfg.with_overrides(|key| std::env::var(key).ok()))
}
