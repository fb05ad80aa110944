//! Persisted configuration and command-line overrides.
//!
//! The configuration file is INI-style with two sections, `[credentials]`
//! and `[options]`, and all seven keys are mandatory. Values are unquoted
//! and taken verbatim after trimming. [`PersistedConfig::load`] validates
//! every key up front and reports all missing ones at once.
//! [`ConfigRecord::resolve`] then lays the caller's overrides on top.

use anyhow::{Context, Result};
use ini::{Ini, ParseOption};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::platform::Fs;

/// Every mandatory key, as `section.key`, in file order.
pub const REQUIRED_KEYS: [&str; 7] = [
    "credentials.user",
    "credentials.pass",
    "credentials.domain",
    "credentials.host",
    "options.sync_interval",
    "options.protocol",
    "options.ssh_port",
];

/// Configuration problems that need the user to edit the file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing configuration key(s): {}. Please configure your credentials file: {}",
        .keys.join(", "),
        .path.display()
    )]
    MissingConfiguration { path: PathBuf, keys: Vec<String> },

    #[error("Failed to parse configuration file: {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
}

/// `[credentials]` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    /// Literal password or one of the `prompt`/`save`/`load` directives.
    pub pass: String,
    pub domain: String,
    pub host: String,
}

/// `[options]` section of the configuration file.
///
/// Values are opaque tokens handed on to the remote-host client unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub sync_interval: String,
    pub protocol: String,
    pub ssh_port: String,
}

/// The validated on-disk configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedConfig {
    pub credentials: Credentials,
    pub options: Options,
}

impl PersistedConfig {
    /// Read and validate the configuration file at `path`.
    ///
    /// A file that doesn't exist has none of the required keys and fails with
    /// [`ConfigError::MissingConfiguration`] listing all of them.
    pub fn load(path: &Path, fs: &impl Fs) -> Result<Self> {
        if !fs.exists(path) {
            debug!("Config file not found: {}", path.display());
            return Err(ConfigError::MissingConfiguration {
                path: path.to_path_buf(),
                keys: REQUIRED_KEYS.iter().map(|k| k.to_string()).collect(),
            }
            .into());
        }
        debug!("Loading config from {}", path.display());
        let contents = fs
            .read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Ok(Self::parse(&contents, path)?)
    }

    /// Parse and validate configuration text. `path` is only used in errors.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        // Quotes and backslashes are part of the value, not syntax.
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini =
            Ini::load_from_str_opt(contents, options).map_err(|source| ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let values = REQUIRED_KEYS.map(|key| lookup(&ini, key));
        match values {
            [
                Some(user),
                Some(pass),
                Some(domain),
                Some(host),
                Some(sync_interval),
                Some(protocol),
                Some(ssh_port),
            ] => Ok(Self {
                credentials: Credentials {
                    user: user.to_string(),
                    pass: pass.to_string(),
                    domain: domain.to_string(),
                    host: host.to_string(),
                },
                options: Options {
                    sync_interval: sync_interval.to_string(),
                    protocol: protocol.to_string(),
                    ssh_port: ssh_port.to_string(),
                },
            }),
            _ => Err(ConfigError::MissingConfiguration {
                path: path.to_path_buf(),
                keys: REQUIRED_KEYS
                    .iter()
                    .zip(values)
                    .filter(|(_, value)| value.is_none())
                    .map(|(key, _)| key.to_string())
                    .collect(),
            }),
        }
    }
}

/// Value of a `section.key` entry, if both the section and the key exist.
fn lookup<'a>(ini: &'a Ini, key: &str) -> Option<&'a str> {
    let (section, name) = key.split_once('.')?;
    ini.section(Some(section))?.get(name)
}

/// Optional values supplied on the command line.
///
/// `None` and the empty string both mean "not supplied".
#[derive(Clone, Default)]
pub struct Overrides {
    pub user: Option<String>,
    /// Literal password or a directive, same as `credentials.pass`.
    pub pass: Option<String>,
    pub domain: Option<String>,
    pub host: Option<String>,
    pub protocol: Option<String>,
}

/// The merged configuration handed to the remote-host client.
///
/// `password` holds a directive until the secret resolver has run, and the
/// plaintext password afterwards (unless nothing could be obtained).
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigRecord {
    pub user: String,
    pub password: String,
    pub domain: String,
    pub host: String,
    pub protocol: String,
    pub sync_interval: String,
    pub ssh_port: String,
}

impl ConfigRecord {
    /// Lay `overrides` over the persisted values. An override wins whenever it is
    /// supplied; `sync_interval` and `ssh_port` always come from the file.
    pub fn resolve(persisted: PersistedConfig, overrides: &Overrides) -> Self {
        let PersistedConfig {
            credentials,
            options,
        } = persisted;
        Self {
            user: pick(overrides.user.as_deref(), credentials.user),
            password: pick(overrides.pass.as_deref(), credentials.pass),
            domain: pick(overrides.domain.as_deref(), credentials.domain),
            host: pick(overrides.host.as_deref(), credentials.host),
            protocol: pick(overrides.protocol.as_deref(), options.protocol),
            sync_interval: options.sync_interval,
            ssh_port: options.ssh_port,
        }
    }

    /// Secret-store account for this identity: `user@host.domain`.
    pub fn qualified_key(&self) -> String {
        format!("{}@{}.{}", self.user, self.host, self.domain)
    }
}

impl fmt::Debug for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigRecord")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("domain", &self.domain)
            .field("host", &self.host)
            .field("protocol", &self.protocol)
            .field("sync_interval", &self.sync_interval)
            .field("ssh_port", &self.ssh_port)
            .finish()
    }
}

fn pick(override_value: Option<&str>, persisted: String) -> String {
    match override_value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => persisted,
    }
}

/// Load the configuration file at `path` and apply `overrides`.
pub fn load(overrides: &Overrides, path: &Path, fs: &impl Fs) -> Result<ConfigRecord> {
    let persisted = PersistedConfig::load(path, fs)?;
    let record = ConfigRecord::resolve(persisted, overrides);
    debug!("Resolved configuration: {record:?}");
    Ok(record)
}
