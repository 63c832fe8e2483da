use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,

    /// Skip TLS certificate and hostname verification. Insecure; off unless
    /// explicitly enabled.
    pub accept_invalid_certs: bool,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: false,
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [http]
/// timeout_secs = 30
/// accept_invalid_certs = false
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub http: HttpSettings,
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-export", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(anyhow!("http.timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, timeout_secs: Option<u64>, insecure: bool) -> Result<Self> {
        if let Some(secs) = timeout_secs {
            self.http.timeout_secs = secs;
        }
        if insecure {
            self.http.accept_invalid_certs = true;
        }
        self.validate()?;
        Ok(self)
    }
}
