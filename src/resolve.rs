//! End-to-end resolution of a session's configuration.
//!
//! Reads `~/.hypy.conf` once, applies the command-line overrides, then
//! resolves the password. The result is what the remote-host client gets.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{self, ConfigRecord, Overrides};
use crate::paths::config_path;
use crate::platform::{Fs, Prompter, SecretStore};
use crate::secrets::{PasswordOutcome, resolve_password};

/// A fully resolved configuration.
#[derive(Debug)]
pub struct Resolved {
    pub record: ConfigRecord,
    pub password: PasswordOutcome,
    /// File the persisted values came from.
    pub config_path: PathBuf,
}

pub fn resolve(
    overrides: &Overrides,
    fs: &impl Fs,
    store: &impl SecretStore,
    prompter: &impl Prompter,
) -> Result<Resolved> {
    let config_path = config_path(fs);
    let mut record = config::load(overrides, &config_path, fs)?;
    let password = resolve_password(&mut record, store, prompter)?;
    Ok(Resolved {
        record,
        password,
        config_path,
    })
}
