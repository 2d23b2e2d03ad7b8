use crate::errors::{AppError, AppResult};
use crate::models::Period;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default = "default_audit_log")]
    pub audit_log: String,
    #[serde(default = "default_missing_marker")]
    pub missing_marker: String,
    #[serde(default = "default_period")]
    pub default_period: Period,
}

fn default_audit_log() -> String {
    Config::audit_log_file().to_string_lossy().to_string()
}
fn default_missing_marker() -> String {
    "—".to_string()
}
fn default_period() -> Period {
    Period::Morning
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            audit_log: default_audit_log(),
            missing_marker: default_missing_marker(),
            default_period: default_period(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("sugarlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".sugarlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("sugarlog.conf")
    }

    /// Return the default path of the JSON store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("daily_log.json")
    }

    /// Return the default path of the audit log
    pub fn audit_log_file() -> PathBuf {
        Self::config_dir().join("sugarlog.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Audit log kept next to `store`: the full file name plus
    /// `.audit.log`, so it never names the store itself.
    pub fn audit_log_beside(store: &Path) -> PathBuf {
        let mut name = store.as_os_str().to_owned();
        name.push(".audit.log");
        PathBuf::from(name)
    }

    /// Point the config at another store; its audit log moves beside it.
    pub fn with_store_override(mut self, store: &str) -> Self {
        let path = expand_tilde(store);
        self.audit_log = Self::audit_log_beside(&path).to_string_lossy().to_string();
        self.store = path.to_string_lossy().to_string();
        self
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Audit log path; a config that points it at the store gets the
    /// derived path instead.
    pub fn audit_log_path(&self) -> PathBuf {
        let audit = expand_tilde(&self.audit_log);
        let store = self.store_path();
        if audit == store {
            Self::audit_log_beside(&store)
        } else {
            audit
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the standard config file.
    pub fn write(&self) -> AppResult<PathBuf> {
        let path = Self::config_file();
        write_config(self, &path)?;
        Ok(path)
    }
}

fn write_config(cfg: &Config, path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, cfg.to_yaml()?)?;
    Ok(())
}
