use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "crm-tui";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmConfig {
    /// Base URL of the CRM service, e.g. "http://localhost:8080"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Bearer token sent with every request. Omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
        }
    }
}

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join(APP_DIR))
}

impl CrmConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(root_path()?.join("crm-tui.log"))
    }

    /// Load config from disk and apply `CRM_API_URL` / `CRM_API_TOKEN`.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::from_toml(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CRM_API_URL").filter(|v| !v.is_empty()) {
            self.api_url = url;
        }
        if let Some(token) = lookup("CRM_API_TOKEN").filter(|v| !v.is_empty()) {
            self.api_token = Some(token);
        }
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Write the default config if no file exists yet. Returns the path.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = CrmConfig::from_toml("").unwrap();
        assert_eq!(config, CrmConfig::default());
    }

    #[test]
    fn reads_url_and_token() {
        let config =
            CrmConfig::from_toml("api_url = \"https://crm.example.com\"\napi_token = \"abc\"")
                .unwrap();
        assert_eq!(config.api_url, "https://crm.example.com");
        assert_eq!(config.api_token.as_deref(), Some("abc"));
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config = CrmConfig::default();
        config.apply_overrides(|key| match key {
            "CRM_API_URL" => Some("http://10.0.0.2:9000".to_string()),
            "CRM_API_TOKEN" => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://10.0.0.2:9000");
        assert_eq!(config.api_token, None);
    }
}
