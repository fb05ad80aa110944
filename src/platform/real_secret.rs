//! Real secret store backed by the OS keyring.
//!
//! macOS Keychain, Windows Credential Manager, or the Linux Secret Service,
//! depending on the platform `keyring` was built for.

use anyhow::{Context, Result};
use keyring::Entry;

use super::SecretStore;

/// Secret store that reads and writes entries in the platform keyring.
pub struct KeyringStore;

impl SecretStore for KeyringStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        let entry = Entry::new(service, account)
            .with_context(|| format!("Invalid keyring entry {service}/{account}"))?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Keyring lookup failed for {account}")),
        }
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        let entry = Entry::new(service, account)
            .with_context(|| format!("Invalid keyring entry {service}/{account}"))?;
        entry
            .set_password(secret)
            .with_context(|| format!("Keyring write failed for {account}"))
    }
}
