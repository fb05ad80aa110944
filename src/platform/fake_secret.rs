//! Fake secret store for testing.
//!
//! Pre-loaded with secrets via `add_secret()`. Counts every `get()` and
//! `set()` so tests can assert exactly how often the store was touched.
//! A failing store can be built with `failing()`.

use anyhow::{Result, bail};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::SecretStore;

/// In-memory secret store — no keyring access.
pub struct FakeSecretStore {
    /// Map of `(service, account)` -> secret.
    secrets: RefCell<HashMap<(String, String), String>>,
    reads: Cell<usize>,
    writes: Cell<usize>,
    fail: bool,
}

impl FakeSecretStore {
    pub fn new() -> Self {
        Self {
            secrets: RefCell::new(HashMap::new()),
            reads: Cell::new(0),
            writes: Cell::new(0),
            fail: false,
        }
    }

    /// A store whose every operation errors, as a locked keyring would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Register a secret that `get()` will return.
    /// Returns the previous value if one was already registered for this key.
    pub fn add_secret(&self, service: &str, account: &str, secret: &str) -> Option<String> {
        self.secrets.borrow_mut().insert(
            (service.to_string(), account.to_string()),
            secret.to_string(),
        )
    }

    /// The secret currently stored for `(service, account)`.
    pub fn secret(&self, service: &str, account: &str) -> Option<String> {
        self.secrets
            .borrow()
            .get(&(service.to_string(), account.to_string()))
            .cloned()
    }

    /// Number of entries in the store.
    pub fn entry_count(&self) -> usize {
        self.secrets.borrow().len()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SecretStore for FakeSecretStore {
    fn get(&self, service: &str, account: &str) -> Result<Option<String>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail {
            bail!("FakeSecretStore: simulated read failure for {account}");
        }
        Ok(self.secret(service, account))
    }

    fn set(&self, service: &str, account: &str, secret: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        if self.fail {
            bail!("FakeSecretStore: simulated write failure for {account}");
        }
        self.add_secret(service, account, secret);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_registered_secret() {
        let store = FakeSecretStore::new();
        store.add_secret("hypy", "alice@hv1.corp", "s3cret");
        assert_eq!(
            store.get("hypy", "alice@hv1.corp").unwrap().as_deref(),
            Some("s3cret")
        );
        assert_eq!(store.reads(), 1);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = FakeSecretStore::new();
        assert_eq!(store.get("hypy", "nobody@nowhere.x").unwrap(), None);
    }

    #[test]
    fn test_wrong_service_is_none() {
        let store = FakeSecretStore::new();
        store.add_secret("hypy", "alice@hv1.corp", "value");
        assert_eq!(store.get("other", "alice@hv1.corp").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = FakeSecretStore::new();
        store.set("hypy", "a@b.c", "old").unwrap();
        store.set("hypy", "a@b.c", "new").unwrap();
        assert_eq!(store.secret("hypy", "a@b.c").as_deref(), Some("new"));
        assert_eq!(store.entry_count(), 1);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_failing_store() {
        let store = FakeSecretStore::failing();
        assert!(store.get("hypy", "a@b.c").is_err());
        assert!(store.set("hypy", "a@b.c", "x").is_err());
        assert_eq!(store.entry_count(), 0);
    }
}
