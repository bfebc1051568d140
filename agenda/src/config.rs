//! Standalone host configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use agenda_client::{
    ClientConfig, ClientError, HeaderSource, StaticHeaders, TokenHeaders,
};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::errors::HostConfigError;
use crate::store::PLUGIN_ID;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "AGENDA_HOST_CONFIG";

const DEFAULT_SERVER_URL: &str = "http://localhost:8065";
const DEFAULT_QUEUE_REFRESH_SECS: u64 = 30;

/// A chat channel the host can switch to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChannelEntry {
    pub id: String,
    pub name: String,
}

impl fmt::Display for ChannelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Host settings read from `host.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub server_url: String,
    pub site_url: String,
    pub team_id: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub auth_token: Option<SecretString>,
    #[serde(deserialize_with = "deserialize_secret")]
    pub csrf_token: Option<SecretString>,
    pub channels: Vec<ChannelEntry>,
    /// Interval of the simulated queue notification; `0` disables it.
    pub queue_refresh_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            site_url: String::from(DEFAULT_SERVER_URL),
            team_id: String::new(),
            auth_token: None,
            csrf_token: None,
            channels: vec![ChannelEntry {
                id: String::from("town-square"),
                name: String::from("Town Square"),
            }],
            queue_refresh_secs: DEFAULT_QUEUE_REFRESH_SECS,
        }
    }
}

impl HostConfig {
    /// Build the client config for the agenda server plugin.
    pub fn client_config(&self) -> Result<ClientConfig, ClientError> {
        ClientConfig::new(&self.server_url, PLUGIN_ID)
    }

    /// Build the header source carrying the host credentials.
    pub fn header_source(&self) -> Arc<dyn HeaderSource> {
        match &self.auth_token {
            Some(token) => {
                let mut headers = TokenHeaders::new(token.clone());
                if let Some(csrf) = &self.csrf_token {
                    headers = headers.with_csrf(csrf.clone());
                }
                Arc::new(headers)
            },
            None => Arc::new(StaticHeaders::default()),
        }
    }

    /// Return the web link of a board card.
    pub fn card_link(&self, board_id: &str, card_id: &str) -> String {
        format!(
            "{}/boards/team/{}/{board_id}/{card_id}",
            self.site_url.trim_end_matches('/'),
            self.team_id
        )
    }

    /// Return the queue refresh interval, if enabled.
    pub fn queue_refresh(&self) -> Option<Duration> {
        (self.queue_refresh_secs > 0)
            .then(|| Duration::from_secs(self.queue_refresh_secs))
    }
}

fn deserialize_secret<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SecretString>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|value| !value.is_empty())
        .map(SecretString::from))
}

/// Status describing how the host config was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostConfigStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the host config.
#[derive(Debug, Clone)]
pub struct HostConfigLoad {
    config: HostConfig,
    status: HostConfigStatus,
}

impl HostConfigLoad {
    pub fn new(config: HostConfig, status: HostConfigStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (HostConfig, HostConfigStatus) {
        (self.config, self.status)
    }
}

/// Load the host config from its default location.
pub fn load_host_config() -> Result<HostConfigLoad, HostConfigError> {
    load_host_config_from_path(&host_config_path())
}

fn load_host_config_from_path(
    path: &Path,
) -> Result<HostConfigLoad, HostConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HostConfigLoad::new(
                HostConfig::default(),
                HostConfigStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<HostConfig>(&data) {
        Ok(config) => {
            Ok(HostConfigLoad::new(config, HostConfigStatus::Loaded))
        },
        Err(err) => Ok(HostConfigLoad::new(
            HostConfig::default(),
            HostConfigStatus::Invalid(format!("{err}")),
        )),
    }
}

fn host_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("agenda")
            .join("host.json");
    }

    std::env::temp_dir().join("agenda").join("host.json")
}
