// ABOUTME: Configuration types and parsing for relevo.yml.
// ABOUTME: Identifies the target service; credentials and clients stay external.

use crate::error::{Error, Result};
use crate::types::ServiceName;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "relevo.yml";
pub const CONFIG_FILENAME_ALT: &str = "relevo.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".relevo/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Cluster the service runs in.
    pub cluster: String,

    #[serde(deserialize_with = "deserialize_service_name")]
    pub service: ServiceName,

    /// Region used for console URLs.
    pub region: String,

    /// Path to the candidate task definition (JSON).
    pub task_definition: PathBuf,

    /// How long to wait for the service to stabilize after a rolling update.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(600)
}

impl Config {
    /// Find and load the config file, searching the standard locations.
    ///
    /// Checks `relevo.yml`, `relevo.yaml`, then `.relevo/config.yml` under
    /// the given directory.
    pub fn discover(dir: &Path) -> Result<Self> {
        for candidate in [CONFIG_FILENAME, CONFIG_FILENAME_ALT, CONFIG_FILENAME_DIR] {
            let path = dir.join(candidate);
            if path.is_file() {
                return Self::load(&path);
            }
        }
        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Load config from a specific path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// A minimal valid config for tests.
    pub fn template() -> Self {
        Self {
            cluster: "default".to_string(),
            service: ServiceName::new("web").expect("template service name is valid"),
            region: "ap-northeast-1".to_string(),
            task_definition: PathBuf::from("ecs-task-def.json"),
            timeout: default_timeout(),
        }
    }
}

fn deserialize_service_name<'de, D>(deserializer: D) -> std::result::Result<ServiceName, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    ServiceName::new(&raw).map_err(serde::de::Error::custom)
}
