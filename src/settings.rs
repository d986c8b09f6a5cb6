use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::HostError;

const APP_DIR: &str = "bom-dashboard";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub address: String,
    pub port: u16,
    pub pick_free_port: bool,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8501,
            pick_free_port: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(SETTINGS_FILE)
    }

    /// Reads settings from `path`. `Ok(None)` means there is no file yet.
    pub fn try_load(path: &Path) -> Result<Option<Self>, HostError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(Some(settings))
    }

    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(settings)) => settings,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[Settings] Failed to load {}: {}, returning defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), HostError> {
        let tmp_path = path.with_extension("tmp");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write to tmp, then rename, so a crash never leaves a half-written file.
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, HostError> {
        let ip: IpAddr = self
            .address
            .trim()
            .parse()
            .map_err(|_| HostError::Config(format!("invalid address '{}'", self.address)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
